//! Pure selector-state to chart-data transformations.

use crate::dataset::Dataset;
use crate::models::*;

/// Success counts per site (all sites) or per outcome (one site).
///
/// For [`SiteChoice::All`] every distinct site gets a slice in name order,
/// including sites with no successes. For a single site the slices are
/// `failure` then `success`, with outcomes that never occurred left out.
pub fn outcome_aggregation(dataset: &Dataset, site: &SiteChoice) -> AggregationResult {
    let mut result = AggregationResult::new();

    match site {
        SiteChoice::All => {
            for site in &dataset.summary().sites {
                result.add(site, 0);
            }
            for record in dataset.records() {
                result.add(&record.launch_site, u64::from(record.outcome.as_class()));
            }
        }
        SiteChoice::Site(name) => {
            let (successes, failures) = dataset
                .site_records(name)
                .fold((0, 0), |(s, f), r| match r.outcome {
                    Outcome::Success => (s + 1, f),
                    Outcome::Failure => (s, f + 1),
                });
            if failures > 0 {
                result.add(Outcome::Failure.as_str(), failures);
            }
            if successes > 0 {
                result.add(Outcome::Success.as_str(), successes);
            }
        }
    }

    result
}

/// Records whose payload lies in `range` (inclusive) and whose site matches
/// `site`, in dataset order.
pub fn payload_correlation<'a>(
    dataset: &'a Dataset,
    site: &SiteChoice,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.payload_within(range))
        .filter(|r| site.matches(&r.launch_site))
        .collect()
}

pub fn outcome_title(site: &SiteChoice) -> String {
    match site {
        SiteChoice::All => "Total Success Launches by Site".to_string(),
        SiteChoice::Site(name) => format!("Total Success Launches for Site {}", name),
    }
}

pub fn payload_title(site: &SiteChoice) -> String {
    match site {
        SiteChoice::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteChoice::Site(name) => {
            format!("Correlation between Payload and Success for Site {}", name)
        }
    }
}

/// The proportion chart for the current site choice.
pub fn outcome_chart(dataset: &Dataset, site: &SiteChoice) -> ChartView {
    ChartView::Proportion {
        title: outcome_title(site),
        slices: outcome_aggregation(dataset, site),
    }
}

/// The payload scatter chart for the current selector state.
pub fn payload_chart(dataset: &Dataset, state: &SelectorState) -> ChartView {
    ChartView::Scatter {
        title: payload_title(&state.site),
        points: payload_correlation(dataset, &state.site, &state.payload_range)
            .into_iter()
            .map(ScatterPoint::from)
            .collect(),
    }
}
