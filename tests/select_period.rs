use return_heatmap_wasm::application::{DashboardController, FetchCommand};
use return_heatmap_wasm::domain::heatmap::{ForwardPeriod, IndexName};
use strum::IntoEnumIterator;

fn controller_with_selection() -> DashboardController {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));
    controller.select_index(Some(IndexName::from("SPX")));
    controller
}

#[test]
fn each_period_reissues_the_heatmap_fetch_with_that_value() {
    for period in ForwardPeriod::iter() {
        let mut controller = controller_with_selection();
        let command = controller.select_period(Some(period));
        assert_eq!(
            command,
            Some(FetchCommand::Heatmap {
                index: IndexName::from("SPX"),
                period: Some(period)
            }),
            "period {period:?}"
        );
        assert!(controller.heatmap().is_loading());
    }
}

#[test]
fn switching_back_to_current_refetches_without_a_period() {
    let mut controller = controller_with_selection();
    controller.select_period(Some(ForwardPeriod::OneYear));

    let command = controller.select_period(None);
    assert_eq!(
        command,
        Some(FetchCommand::Heatmap { index: IndexName::from("SPX"), period: None })
    );
}

#[test]
fn period_without_a_selected_index_only_updates_state() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));

    let command = controller.select_period(Some(ForwardPeriod::ThreeMonths));
    assert_eq!(command, None);
    assert_eq!(controller.selection().period, Some(ForwardPeriod::ThreeMonths));
    assert!(!controller.heatmap().is_loading());
}

#[test]
fn stored_period_rides_along_with_a_later_index_pick() {
    let mut controller = DashboardController::new();
    controller.initialize();
    controller.apply_catalog(Ok(vec![IndexName::from("SPX")]));
    controller.select_period(Some(ForwardPeriod::FourYears));

    let command = controller.select_index(Some(IndexName::from("SPX")));
    assert_eq!(
        command,
        Some(FetchCommand::Heatmap {
            index: IndexName::from("SPX"),
            period: Some(ForwardPeriod::FourYears)
        })
    );
}
