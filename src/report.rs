//! Plain-text rendering of dataset summaries and chart views for the CLI.

use crate::dashboard::ChartRenderer;
use crate::models::{ChartView, DatasetSummary, ScatterPoint};

const SUCCESS: char = '●';
const FAILURE: char = '✗';

fn class_symbol(class: u8) -> char {
    if class == 1 {
        SUCCESS
    } else {
        FAILURE
    }
}

fn branch(is_last: bool) -> &'static str {
    if is_last {
        "└── "
    } else {
        "├── "
    }
}

/// Render the load-time summary.
///
/// Example output:
/// ```text
/// 4 launches (3 successes, 1 failures)
/// Payload range: 0 - 9600 kg
/// Sites
/// ├── CCAFS LC-40
/// └── KSC LC-39A
/// ```
pub fn render_summary(summary: &DatasetSummary) -> String {
    let mut output = format!(
        "{} launches ({} successes, {} failures)\nPayload range: {} - {} kg\nSites\n",
        summary.launches,
        summary.successes,
        summary.failures(),
        summary.min_payload,
        summary.max_payload
    );
    for (i, site) in summary.sites.iter().enumerate() {
        output.push_str(branch(i == summary.sites.len() - 1));
        output.push_str(site);
        output.push('\n');
    }
    output
}

/// Render one chart view as a titled list.
pub fn render_chart(view: &ChartView) -> String {
    let mut output = String::new();
    output.push_str(view.title());
    output.push('\n');

    match view {
        ChartView::Proportion { slices, .. } => {
            let total = slices.total();
            if slices.is_empty() {
                output.push_str(branch(true));
                output.push_str("(no launches)\n");
            }
            for (i, row) in slices.rows().iter().enumerate() {
                let share = if total == 0 {
                    0.0
                } else {
                    row.value as f64 * 100.0 / total as f64
                };
                output.push_str(branch(i == slices.len() - 1));
                output.push_str(&format!("{}: {} ({:.1}%)\n", row.label, row.value, share));
            }
        }
        ChartView::Scatter { points, .. } => {
            if points.is_empty() {
                output.push_str(branch(true));
                output.push_str("(no launches in range)\n");
            }
            for (i, point) in points.iter().enumerate() {
                output.push_str(branch(i == points.len() - 1));
                render_point(&mut output, point);
            }
        }
    }
    output
}

fn render_point(output: &mut String, point: &ScatterPoint) {
    output.push(class_symbol(point.class));
    output.push_str(&format!(
        " #{} {} kg [{}] {}\n",
        point.flight_number, point.payload_mass_kg, point.booster_version_category, point.launch_site
    ));
}

/// Keeps the latest text rendering of each chart, in first-render order.
#[derive(Debug, Default)]
pub struct TextRenderer {
    charts: Vec<(String, String)>,
    renders: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All charts, separated by blank lines.
    pub fn output(&self) -> String {
        self.charts
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn chart(&self, chart_id: &str) -> Option<&str> {
        self.charts
            .iter()
            .find(|(id, _)| id == chart_id)
            .map(|(_, text)| text.as_str())
    }

    /// Total render calls received, including replacements.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl ChartRenderer for TextRenderer {
    fn render(&mut self, chart_id: &str, view: &ChartView) {
        let text = render_chart(view);
        match self.charts.iter_mut().find(|(id, _)| id == chart_id) {
            Some((_, existing)) => *existing = text,
            None => self.charts.push((chart_id.to_string(), text)),
        }
        self.renders += 1;
    }
}
