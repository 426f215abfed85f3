use axum::http::StatusCode;
use axum_test::TestServer;
use launch_dash::api::create_router;
use launch_dash::dataset::Dataset;
use launch_dash::models::*;

const FIXTURE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,A,1,100,F9 v1.0 B0003,v1.0
2,A,1,2000,F9 FT B1019,FT
3,A,1,3000,F9 FT B1021,FT
4,A,0,6000,F9 FT B1022,FT
5,B,0,4000,F9 B4 B1040,B4
6,B,0,9000,F9 B5 B1046,B5
";

fn setup() -> TestServer {
    let dataset = Dataset::from_reader(FIXTURE.as_bytes()).expect("Failed to load dataset");
    let app = create_router(dataset);
    TestServer::new(app).expect("Failed to create test server")
}

fn slices(view: ChartView) -> AggregationResult {
    match view {
        ChartView::Proportion { slices, .. } => slices,
        other => panic!("expected proportion chart, got {:?}", other),
    }
}

fn points(view: ChartView) -> Vec<ScatterPoint> {
    match view {
        ChartView::Scatter { points, .. } => points,
        other => panic!("expected scatter chart, got {:?}", other),
    }
}

mod page {
    use super::*;

    #[tokio::test]
    async fn serves_dashboard_html() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("id=\"site-dropdown\""));
        assert!(body.contains("id=\"success-pie-chart\""));
        assert!(body.contains("id=\"success-payload-scatter-chart\""));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

mod summary {
    use super::*;

    #[tokio::test]
    async fn returns_sites_and_slider_bounds() {
        let server = setup();

        let response = server.get("/api/v1/summary").await;

        response.assert_status_ok();
        let options: DashboardOptions = response.json();
        let values: Vec<&str> = options.sites.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "A", "B"]);
        assert_eq!(options.summary.launches, 6);
        assert_eq!(options.slider.min, 0.0);
        assert_eq!(options.slider.max, 10000.0);
        assert_eq!(options.slider.step, 1000.0);
        assert_eq!(options.slider.value, PayloadRange::new(100.0, 9000.0));
    }

    #[tokio::test]
    async fn lists_all_records() {
        let server = setup();

        let response = server.get("/api/v1/records").await;

        response.assert_status_ok();
        let records: Vec<LaunchRecord> = response.json();
        assert_eq!(records.len(), 6);
        assert_eq!(records[4].booster_version_category, "B4");
    }
}

mod outcome_chart {
    use super::*;

    #[tokio::test]
    async fn defaults_to_all_sites() {
        let server = setup();

        let response = server.get("/api/v1/charts/outcomes").await;

        response.assert_status_ok();
        let view: ChartView = response.json();
        assert_eq!(view.kind(), ChartKind::Proportion);
        assert_eq!(view.title(), "Total Success Launches by Site");
        let slices = slices(view);
        assert_eq!(slices.get("A"), Some(3));
        assert_eq!(slices.get("B"), Some(0));
    }

    #[tokio::test]
    async fn breaks_down_a_single_site_by_outcome() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/outcomes")
            .add_query_param("site", "A")
            .await;

        response.assert_status_ok();
        let view: ChartView = response.json();
        assert_eq!(view.title(), "Total Success Launches for Site A");
        let slices = slices(view);
        assert_eq!(slices.get("success"), Some(3));
        assert_eq!(slices.get("failure"), Some(1));
    }

    #[tokio::test]
    async fn rejects_unknown_site() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/outcomes")
            .add_query_param("site", "Boca Chica")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Launch site not found: Boca Chica");
    }
}

mod payload_chart {
    use super::*;

    #[tokio::test]
    async fn defaults_to_full_range() {
        let server = setup();

        let response = server.get("/api/v1/charts/payload").await;

        response.assert_status_ok();
        let view: ChartView = response.json();
        assert_eq!(
            view.title(),
            "Correlation between Payload and Success for all Sites"
        );
        assert_eq!(points(view).len(), 6);
    }

    #[tokio::test]
    async fn filters_by_range_inclusively() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("low", 2000)
            .add_query_param("high", 6000)
            .await;

        response.assert_status_ok();
        let flights: Vec<u32> = points(response.json())
            .iter()
            .map(|p| p.flight_number)
            .collect();
        assert_eq!(flights, vec![2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn filters_by_site_and_range() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("site", "B")
            .add_query_param("low", 0)
            .add_query_param("high", 5000)
            .await;

        response.assert_status_ok();
        let points = points(response.json());
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].payload_mass_kg, 4000.0);
        assert_eq!(points[0].class, 0);
        assert_eq!(points[0].booster_version_category, "B4");
    }

    #[tokio::test]
    async fn returns_empty_points_for_empty_intersection() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("site", "A")
            .add_query_param("low", 7000)
            .add_query_param("high", 8000)
            .await;

        response.assert_status_ok();
        assert!(points(response.json()).is_empty());
    }

    #[tokio::test]
    async fn swaps_reversed_bounds() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("low", 10000)
            .add_query_param("high", -500)
            .await;

        response.assert_status_ok();
        assert_eq!(points(response.json()).len(), 6);
    }

    #[tokio::test]
    async fn returns_nothing_above_the_heaviest_payload() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("low", 10000)
            .add_query_param("high", 10000)
            .await;

        response.assert_status_ok();
        assert!(points(response.json()).is_empty());
    }

    #[tokio::test]
    async fn returns_nothing_below_the_lightest_payload() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("low", 0)
            .add_query_param("high", 0)
            .await;

        response.assert_status_ok();
        assert!(points(response.json()).is_empty());
    }

    #[tokio::test]
    async fn rejects_non_numeric_bounds() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("low", "heavy")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_non_finite_bounds() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload")
            .add_query_param("high", "inf")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Payload bounds must be finite numbers");
    }
}
