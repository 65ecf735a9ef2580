use return_heatmap_wasm::application::{DashboardController, FetchCommand};
use return_heatmap_wasm::domain::heatmap::{HeatmapPayload, IndexName};
use serde_json::json;

fn payload(index: &str) -> HeatmapPayload {
    serde_json::from_value(json!({
        "index": index,
        "heatmap": { "2025": { "1": 0.031, "2": -0.012 } },
        "monthly_price": { "2025": { "1": 4810.22, "2": 4753.08 } },
        "monthly_profits": { "2025": { "1": 0.031, "2": -0.012 } },
        "avg_monthly_profits_3y": 0.0075,
        "rank_percentile_4y": 62.5,
        "inverse_rank_percentile": 37.5,
        "monthly_rank_percentile": { "2025": { "1": 3, "2": 11 } }
    }))
    .expect("fixture parses")
}

fn loaded_controller() -> DashboardController {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX"), IndexName::from("NDX")]));
    controller
}

#[test]
fn selecting_an_index_issues_one_default_period_fetch() {
    let mut controller = loaded_controller();

    let command = controller.select_index(Some(IndexName::from("SPX")));
    assert_eq!(
        command,
        Some(FetchCommand::Heatmap { index: IndexName::from("SPX"), period: None })
    );
    assert!(controller.heatmap().is_loading());
}

#[test]
fn success_lands_the_exact_payload() {
    let mut controller = loaded_controller();
    controller.select_index(Some(IndexName::from("SPX")));

    let expected = payload("SPX");
    controller.apply_heatmap(Ok(expected.clone()));

    assert_eq!(controller.heatmap().value(), Some(&expected));
    assert!(!controller.heatmap().is_loading());
    assert!(!controller.catalog().is_loading());
    assert_eq!(controller.heatmap().error(), None);
}

#[test]
fn failure_clears_payload_and_stores_message() {
    let mut controller = loaded_controller();
    controller.select_index(Some(IndexName::from("SPX")));
    controller.apply_heatmap(Ok(payload("SPX")));

    controller.select_index(Some(IndexName::from("NDX")));
    controller.apply_heatmap(Err("failed to fetch heatmap for 'NDX'".to_string()));

    assert!(controller.heatmap().value().is_none());
    assert_eq!(controller.heatmap().error(), Some("failed to fetch heatmap for 'NDX'"));
}

#[test]
fn empty_selection_clears_heatmap_without_fetching() {
    let mut controller = loaded_controller();
    controller.select_index(Some(IndexName::from("SPX")));
    controller.apply_heatmap(Ok(payload("SPX")));

    let command = controller.select_index(None);
    assert_eq!(command, None);
    assert!(controller.selection().index.is_none());
    assert!(controller.heatmap().value().is_none());
    assert!(!controller.heatmap().is_loading());
}

#[test]
fn placeholder_select_value_maps_to_no_selection() {
    assert_eq!(IndexName::from_select_value(""), None);
    assert_eq!(IndexName::from_select_value("SPX"), Some(IndexName::from("SPX")));
}

#[test]
fn starting_a_fetch_clears_a_previous_error() {
    let mut controller = loaded_controller();
    controller.select_index(Some(IndexName::from("SPX")));
    controller.apply_heatmap(Err("boom".to_string()));

    controller.select_index(Some(IndexName::from("SPX")));
    assert!(controller.heatmap().is_loading());
    assert_eq!(controller.heatmap().error(), None);
}
