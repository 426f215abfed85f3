use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::dashboard::views;
use crate::dataset::Dataset;
use crate::models::*;

use super::page::DASHBOARD_HTML;

// ============================================================
// Error Handling
// ============================================================

/// Log a rejected request and return its message to the client.
fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    let msg = msg.into();
    tracing::warn!("Rejected request: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

/// Resolve the `site` query parameter against the loaded sites.
/// A missing parameter means all sites.
fn resolve_site(dataset: &Dataset, raw: Option<&str>) -> Result<SiteChoice, (StatusCode, String)> {
    let choice = raw.map(SiteChoice::parse).unwrap_or_default();
    match &choice {
        SiteChoice::Site(name) if !dataset.summary().has_site(name) => {
            Err(bad_request(format!("Launch site not found: {}", name)))
        }
        _ => Ok(choice),
    }
}

// ============================================================
// Page
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dataset
// ============================================================

pub async fn get_summary(State(dataset): State<Dataset>) -> Json<DashboardOptions> {
    Json(DashboardOptions::for_summary(dataset.summary()))
}

pub async fn list_records(State(dataset): State<Dataset>) -> Json<Vec<LaunchRecord>> {
    Json(dataset.records().to_vec())
}

// ============================================================
// Charts
// ============================================================

#[derive(Debug, Deserialize)]
pub struct OutcomeQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayloadQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub async fn outcome_chart(
    State(dataset): State<Dataset>,
    Query(query): Query<OutcomeQuery>,
) -> Result<Json<ChartView>, (StatusCode, String)> {
    let site = resolve_site(&dataset, query.site.as_deref())?;
    tracing::debug!("Outcome chart for {}", site);
    Ok(Json(views::outcome_chart(&dataset, &site)))
}

pub async fn payload_chart(
    State(dataset): State<Dataset>,
    Query(query): Query<PayloadQuery>,
) -> Result<Json<ChartView>, (StatusCode, String)> {
    let site = resolve_site(&dataset, query.site.as_deref())?;

    let summary = dataset.summary();
    let requested = PayloadRange::new(
        query.low.unwrap_or(summary.min_payload),
        query.high.unwrap_or(summary.max_payload),
    );
    if !requested.is_finite() {
        return Err(bad_request("Payload bounds must be finite numbers"));
    }
    let payload_range = requested.ordered();

    tracing::debug!(
        "Payload chart for {} over [{}, {}]",
        site,
        payload_range.low,
        payload_range.high
    );
    let state = SelectorState {
        site,
        payload_range,
    };
    Ok(Json(views::payload_chart(&dataset, &state)))
}
