use serde::{Deserialize, Serialize};

use super::{DatasetSummary, LaunchRecord, PayloadRange, ALL_SITES};

/// One category of an aggregation: a label and the measure counted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub label: String,
    pub value: u64,
}

/// Ordered mapping from category label to count.
///
/// Labels are unique and keep their insertion order, which is the order the
/// proportion chart draws its slices in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationResult {
    rows: Vec<AggregateRow>,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `label`, creating the row at the end if it is new.
    pub fn add(&mut self, label: &str, amount: u64) {
        match self.rows.iter_mut().find(|r| r.label == label) {
            Some(row) => row.value += amount,
            None => self.rows.push(AggregateRow {
                label: label.to_string(),
                value: amount,
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value)
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which kind of figure a chart renderer should draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Proportion,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proportion => "proportion",
            Self::Scatter => "scatter",
        }
    }
}

/// A launch projected for the payload scatter plot.
///
/// `class` is the 0/1 outcome indicator plotted on the y axis; points are
/// colored by `booster_version_category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub flight_number: u32,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version: String,
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            flight_number: record.flight_number,
            launch_site: record.launch_site.clone(),
            payload_mass_kg: record.payload_mass_kg,
            class: record.outcome.as_class(),
            booster_version: record.booster_version.clone(),
            booster_version_category: record.booster_version_category.clone(),
        }
    }
}

/// Everything a chart renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartView {
    Proportion {
        title: String,
        slices: AggregationResult,
    },
    Scatter {
        title: String,
        points: Vec<ScatterPoint>,
    },
}

impl ChartView {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Proportion { .. } => ChartKind::Proportion,
            Self::Scatter { .. } => ChartKind::Scatter,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Proportion { title, .. } | Self::Scatter { title, .. } => title,
        }
    }
}

/// Payload slider lower edge and notch spacing, in kilograms.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_STEP: f64 = 1000.0;
/// The slider spans at least this far even for light-payload datasets.
pub const SLIDER_MIN_SPAN: f64 = 10000.0;

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Bounds and initial value for the payload range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Labelled notches, one per step.
    pub marks: Vec<f64>,
    /// Initial selection: the dataset's observed payload range.
    pub value: PayloadRange,
}

impl SliderConfig {
    pub fn for_summary(summary: &DatasetSummary) -> Self {
        let max = (summary.max_payload / SLIDER_STEP).ceil() * SLIDER_STEP;
        let max = max.max(SLIDER_MIN_SPAN);
        let notches = ((max - SLIDER_MIN) / SLIDER_STEP) as usize;
        Self {
            min: SLIDER_MIN,
            max,
            step: SLIDER_STEP,
            marks: (0..=notches).map(|i| SLIDER_MIN + i as f64 * SLIDER_STEP).collect(),
            value: summary.payload_range(),
        }
    }
}

/// Everything the page needs to build its selector controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub summary: DatasetSummary,
    /// `All Sites` first, then each site sorted by name.
    pub sites: Vec<SiteOption>,
    pub slider: SliderConfig,
}

impl DashboardOptions {
    pub fn for_summary(summary: &DatasetSummary) -> Self {
        let sites = std::iter::once(SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(summary.sites.iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }))
        .collect();

        Self {
            summary: summary.clone(),
            sites,
            slider: SliderConfig::for_summary(summary),
        }
    }
}
