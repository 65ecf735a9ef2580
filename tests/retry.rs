use return_heatmap_wasm::application::{DashboardController, FetchCommand};
use return_heatmap_wasm::domain::heatmap::{ForwardPeriod, HeatmapPayload, IndexName};
use serde_json::json;

fn payload(index: &str) -> HeatmapPayload {
    serde_json::from_value(json!({
        "index": index,
        "heatmap": { "2025": { "1": 0.01 } },
        "monthly_price": { "2025": { "1": 100.0 } },
        "monthly_profits": { "2025": { "1": 0.01 } },
        "avg_monthly_profits_3y": null,
        "rank_percentile_4y": null,
        "inverse_rank_percentile": null,
        "monthly_rank_percentile": { "2025": { "1": 1 } }
    }))
    .expect("fixture parses")
}

#[test]
fn retry_is_a_noop_while_catalog_fetch_is_in_flight() {
    let mut controller = DashboardController::new();
    controller.initialize();
    assert_eq!(controller.retry(), None);
}

#[test]
fn retry_is_a_noop_while_heatmap_fetch_is_in_flight() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));
    controller.select_index(Some(IndexName::from("SPX")));

    assert_eq!(controller.retry(), None);
}

#[test]
fn retry_reissues_catalog_fetch_after_catalog_failure() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Err("db down".to_string()));

    assert_eq!(controller.retry(), Some(FetchCommand::Catalog));
    assert!(controller.catalog().is_loading());
}

#[test]
fn retry_reissues_heatmap_fetch_for_current_selection() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("NDX")]));
    controller.select_period(Some(ForwardPeriod::SixMonths));
    controller.select_index(Some(IndexName::from("NDX")));
    controller.apply_heatmap(Err("boom".to_string()));

    assert_eq!(
        controller.retry(),
        Some(FetchCommand::Heatmap {
            index: IndexName::from("NDX"),
            period: Some(ForwardPeriod::SixMonths)
        })
    );
}

#[test]
fn retry_with_loaded_catalog_and_no_selection_does_nothing() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));

    assert_eq!(controller.retry(), None);
}

#[test]
fn retry_after_settled_success_refetches_the_heatmap() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));
    controller.select_index(Some(IndexName::from("SPX")));
    controller.apply_heatmap(Ok(payload("SPX")));

    assert_eq!(
        controller.retry(),
        Some(FetchCommand::Heatmap { index: IndexName::from("SPX"), period: None })
    );
}
