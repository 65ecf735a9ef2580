use return_heatmap_wasm::app::{
    MONTH_LABELS, cell_color, cell_tooltip, format_fraction_pct, format_percentile,
    format_return_pct, period_label,
};
use return_heatmap_wasm::domain::heatmap::ForwardPeriod;

#[test]
fn return_cells_render_signed_percentages() {
    assert_eq!(format_return_pct(Some(0.0234)), "+2.3%");
    assert_eq!(format_return_pct(Some(-0.0123)), "-1.2%");
    assert_eq!(format_return_pct(Some(0.0)), "+0.0%");
    assert_eq!(format_return_pct(None), "");
}

#[test]
fn summary_metrics_render_with_na_gaps() {
    assert_eq!(format_fraction_pct(Some(0.0123)), "+1.23%");
    assert_eq!(format_fraction_pct(None), "n/a");
    assert_eq!(format_percentile(Some(85.0)), "85.0");
    assert_eq!(format_percentile(None), "n/a");
}

#[test]
fn gains_are_green_and_losses_are_red() {
    let gain = cell_color(Some(0.03));
    assert!(gain.starts_with("rgba(34, 170, 90,"), "{gain}");
    let loss = cell_color(Some(-0.03));
    assert!(loss.starts_with("rgba(214, 69, 65,"), "{loss}");
}

#[test]
fn color_intensity_saturates_at_the_cap() {
    assert_eq!(cell_color(Some(0.08)), "rgba(34, 170, 90, 0.800)");
    assert_eq!(cell_color(Some(0.5)), "rgba(34, 170, 90, 0.800)");
    assert_eq!(cell_color(Some(-1.0)), "rgba(214, 69, 65, 0.800)");
}

#[test]
fn missing_cells_are_near_transparent() {
    assert_eq!(cell_color(None), "rgba(255, 255, 255, 0.04)");
}

#[test]
fn period_labels_cover_current_and_all_horizons() {
    assert_eq!(period_label(None), "Current");
    assert_eq!(period_label(Some(ForwardPeriod::OneMonth)), "1M");
    assert_eq!(period_label(Some(ForwardPeriod::FourYears)), "4Y");
}

#[test]
fn twelve_month_columns() {
    assert_eq!(MONTH_LABELS.len(), 12);
    assert_eq!(MONTH_LABELS[0], "Jan");
    assert_eq!(MONTH_LABELS[11], "Dec");
}

#[test]
fn tooltips_combine_the_auxiliary_matrices() {
    assert_eq!(cell_tooltip(Some(4810.223), Some(3)), "avg price 4810.22 · rank #3");
    assert_eq!(cell_tooltip(Some(100.0), None), "avg price 100.00");
    assert_eq!(cell_tooltip(None, Some(11)), "rank #11");
    assert_eq!(cell_tooltip(None, None), "");
}
