mod handlers;
mod page;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dataset::Dataset;

pub fn create_router(dataset: Dataset) -> Router {
    let api = Router::new()
        // Selector controls
        .route("/summary", get(handlers::get_summary))
        .route("/records", get(handlers::list_records))
        // Charts
        .route("/charts/outcomes", get(handlers::outcome_chart))
        .route("/charts/payload", get(handlers::payload_chart))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(dataset)
}
