use leptos::*;
use std::cell::RefCell;

use crate::application::{DashboardController, FetchCommand};
use crate::domain::heatmap::{ForwardPeriod, HeatmapApi, HeatmapPayload, IndexName, month_value};
use crate::domain::state::RequestState;
use crate::global_state::{catalog_state, heatmap_state, selected_index, selected_period};
use crate::infrastructure::http::HeatmapRestClient;
use strum::IntoEnumIterator;

thread_local! {
    static CONTROLLER: RefCell<DashboardController> = RefCell::new(DashboardController::new());
}

pub const MONTH_LABELS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Color intensity saturates at this absolute monthly return.
const COLOR_SATURATION_RETURN: f64 = 0.08;

/// "+2.3%" cell text; blank for months the backend could not compute.
pub fn format_return_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.1}%", v * 100.0),
        None => String::new(),
    }
}

/// Fractional metric (e.g. 0.0123) rendered as a percentage.
pub fn format_fraction_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.2}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

/// Metric already on a 0-100 scale.
pub fn format_percentile(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    }
}

/// Green for gains, red for losses, near-transparent neutral for gaps.
pub fn cell_color(value: Option<f64>) -> String {
    match value {
        None => "rgba(255, 255, 255, 0.04)".to_string(),
        Some(v) => {
            let intensity = (v.abs() / COLOR_SATURATION_RETURN).min(1.0);
            let alpha = 0.15 + 0.65 * intensity;
            if v >= 0.0 {
                format!("rgba(34, 170, 90, {alpha:.3})")
            } else {
                format!("rgba(214, 69, 65, {alpha:.3})")
            }
        }
    }
}

pub fn period_label(period: Option<ForwardPeriod>) -> &'static str {
    period.map_or("Current", |p| p.as_str())
}

/// Hover text combining the auxiliary matrices for one cell.
pub fn cell_tooltip(price: Option<f64>, rank: Option<u32>) -> String {
    match (price, rank) {
        (Some(price), Some(rank)) => format!("avg price {price:.2} · rank #{rank}"),
        (Some(price), None) => format!("avg price {price:.2}"),
        (None, Some(rank)) => format!("rank #{rank}"),
        (None, None) => String::new(),
    }
}

fn sync_signals(controller: &DashboardController) {
    catalog_state().set(controller.catalog().clone());
    heatmap_state().set(controller.heatmap().clone());
    selected_index().set(controller.selection().index.clone());
    selected_period().set(controller.selection().period);
}

/// Route one user intent through the controller, mirror the new state into
/// the signals, and execute the emitted fetch (if any) off the main flow.
fn dispatch(intent: impl FnOnce(&mut DashboardController) -> Option<FetchCommand>) {
    let command = CONTROLLER.with(|controller| {
        let mut controller = controller.borrow_mut();
        let command = intent(&mut controller);
        sync_signals(&controller);
        command
    });
    if let Some(command) = command {
        spawn_local(run_command(HeatmapRestClient::new(), command));
    }
}

fn apply_completion(apply: impl FnOnce(&mut DashboardController)) {
    CONTROLLER.with(|controller| {
        let mut controller = controller.borrow_mut();
        apply(&mut controller);
        sync_signals(&controller);
    });
}

async fn run_command<A: HeatmapApi>(api: A, command: FetchCommand) {
    match command {
        FetchCommand::Catalog => {
            let result = api.fetch_indices().await;
            apply_completion(|controller| controller.apply_catalog(result));
        }
        FetchCommand::Heatmap { index, period } => {
            let result = api.fetch_heatmap(&index, period).await;
            apply_completion(|controller| controller.apply_heatmap(result));
        }
    }
}

/// 📊 Root component of the return-heatmap dashboard
#[component]
pub fn App() -> impl IntoView {
    // Catalog load kicks off once on mount; the controller ignores repeats.
    create_effect(move |_| {
        dispatch(|controller| controller.initialize());
    });

    view! {
        <style>{APP_CSS}</style>
        <div class="heatmap-app">
            <Header />
            <div class="controls">
                <IndexSelector />
                <PeriodSelector />
            </div>
            <ContentArea />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let catalog = catalog_state();
    let selected = selected_index();

    view! {
        <div class="header">
            <h1>"📊 Index Return Heatmap"</h1>
            <p>"Monthly returns by index and horizon"</p>
            <div class="status-info">
                <div class="status-item">
                    <div class="status-value">
                        {move || catalog.with(|s| s.value().map_or(0, Vec::len)).to_string()}
                    </div>
                    <div class="status-label">"Indices"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || {
                            selected.with(|s| {
                                s.as_ref().map_or_else(|| "none".to_string(), |i| i.value().to_string())
                            })
                        }}
                    </div>
                    <div class="status-label">"Selected"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || period_label(selected_period().get())}
                    </div>
                    <div class="status-label">"Period"</div>
                </div>
            </div>
        </div>
    }
}

/// Catalog dropdown; the empty option is "none selected" and clears the grid.
#[component]
fn IndexSelector() -> impl IntoView {
    let catalog = catalog_state();

    view! {
        <select
            class="index-select"
            disabled=move || !catalog.with(|s| s.is_success())
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                dispatch(move |controller| {
                    controller.select_index(IndexName::from_select_value(&raw))
                });
            }
        >
            <option value="">"Select an index…"</option>
            {move || {
                catalog
                    .with(|s| s.value().cloned().unwrap_or_default())
                    .into_iter()
                    .map(|name| {
                        let value = name.value().to_string();
                        view! { <option value=value.clone()>{value}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// One button per lens: Current plus the seven forward horizons.
#[component]
fn PeriodSelector() -> impl IntoView {
    let selected = selected_period();
    let lenses: Vec<Option<ForwardPeriod>> =
        std::iter::once(None).chain(ForwardPeriod::iter().map(Some)).collect();

    view! {
        <div class="period-bar">
            {lenses
                .into_iter()
                .map(|lens| {
                    view! {
                        <button
                            class="period-btn"
                            class:active=move || selected.get() == lens
                            on:click=move |_| dispatch(move |controller| {
                                controller.select_period(lens)
                            })
                        >
                            {period_label(lens)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContentArea() -> impl IntoView {
    let catalog = catalog_state();
    let heatmap = heatmap_state();

    view! {
        <div class="content">
            {move || {
                if catalog.with(|s| s.is_loading()) {
                    return view! { <Spinner label="Loading indices…" /> }.into_view();
                }
                if let Some(message) = catalog.with(|s| s.error().map(str::to_string)) {
                    return view! { <ErrorPanel message=message /> }.into_view();
                }
                match heatmap.get() {
                    RequestState::Idle => view! {
                        <div class="placeholder">"Pick an index to see its return heatmap"</div>
                    }
                    .into_view(),
                    RequestState::Loading => view! { <Spinner label="Loading heatmap…" /> }.into_view(),
                    RequestState::Error(message) => view! { <ErrorPanel message=message /> }.into_view(),
                    RequestState::Success(payload) => view! { <HeatmapGrid payload=payload /> }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
            <div class="spinner-label">{label}</div>
        </div>
    }
}

/// Error panel with the retry affordance. The controller already treats retry
/// as a no-op while a fetch is in flight; the disabled state mirrors that.
#[component]
fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    let catalog = catalog_state();
    let heatmap = heatmap_state();
    let in_flight =
        move || catalog.with(|s| s.is_loading()) || heatmap.with(|s| s.is_loading());

    view! {
        <div class="error-panel">
            <div class="error-icon">"⚠️"</div>
            <div class="error-message">{message}</div>
            <button
                class="retry-btn"
                disabled=in_flight
                on:click=move |_| dispatch(|controller| controller.retry())
            >
                "Retry"
            </button>
        </div>
    }
}

/// Years × months table, rendered straight from the payload.
#[component]
fn HeatmapGrid(payload: HeatmapPayload) -> impl IntoView {
    let years = payload.years_desc();

    view! {
        <div class="heatmap-view">
            <div class="heatmap-title">
                <h2>{payload.index.clone()}</h2>
                <span class="lens-label">{move || period_label(selected_period().get())}</span>
            </div>
            <div class="summary">
                <div class="summary-item">
                    <div class="summary-value">
                        {format_fraction_pct(payload.avg_monthly_profits_3y)}
                    </div>
                    <div class="summary-label">"Avg monthly profit (3y)"</div>
                </div>
                <div class="summary-item">
                    <div class="summary-value">{format_percentile(payload.rank_percentile_4y)}</div>
                    <div class="summary-label">"Rank percentile (4y)"</div>
                </div>
                <div class="summary-item">
                    <div class="summary-value">
                        {format_percentile(payload.inverse_rank_percentile)}
                    </div>
                    <div class="summary-label">"Inverse rank percentile"</div>
                </div>
            </div>
            <table class="heatmap-table">
                <thead>
                    <tr>
                        <th class="year-col">"Year"</th>
                        {MONTH_LABELS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {years
                        .into_iter()
                        .map(|year| {
                            let cells = (1..=12u32)
                                .map(|month| {
                                    let value = month_value(&payload.heatmap, &year, month);
                                    let price = month_value(&payload.monthly_price, &year, month);
                                    let rank = month_value(
                                        &payload.monthly_rank_percentile,
                                        &year,
                                        month,
                                    );
                                    view! {
                                        <td
                                            class="cell"
                                            style:background-color=cell_color(value)
                                            title=cell_tooltip(price, rank)
                                        >
                                            {format_return_pct(value)}
                                        </td>
                                    }
                                })
                                .collect_view();
                            view! {
                                <tr>
                                    <th class="year-col">{year.clone()}</th>
                                    {cells}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

const APP_CSS: &str = r#"
.heatmap-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
    min-height: 100vh;
    padding: 20px;
    color: white;
}

.header {
    text-align: center;
    margin-bottom: 20px;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
    padding: 20px;
    border-radius: 15px;
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.status-info {
    display: flex;
    justify-content: center;
    gap: 40px;
    margin-top: 15px;
}

.status-item {
    text-align: center;
}

.status-value {
    font-size: 20px;
    font-weight: 700;
    color: #72c685;
}

.status-label {
    font-size: 12px;
    color: #a0a0a0;
    margin-top: 5px;
}

.controls {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 15px;
    margin-bottom: 20px;
}

.index-select {
    background: rgba(0, 0, 0, 0.4);
    color: white;
    border: 1px solid #4a5d73;
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 14px;
    min-width: 240px;
}

.index-select:disabled {
    opacity: 0.5;
}

.period-bar {
    display: flex;
    gap: 6px;
}

.period-btn {
    background: #4a5d73;
    color: white;
    border: none;
    padding: 8px 12px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 13px;
}

.period-btn:hover {
    background: #5a6d83;
}

.period-btn.active {
    background: #f39c12;
    font-weight: bold;
}

.content {
    display: flex;
    justify-content: center;
}

.placeholder {
    color: #a0a0a0;
    padding: 60px 20px;
    font-size: 16px;
}

.spinner-wrap {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 12px;
    padding: 50px;
}

.spinner {
    width: 36px;
    height: 36px;
    border: 4px solid rgba(255, 255, 255, 0.2);
    border-top-color: #72c685;
    border-radius: 50%;
    animation: spin 0.9s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.spinner-label {
    color: #a0a0a0;
    font-size: 14px;
}

.error-panel {
    background: rgba(0, 0, 0, 0.5);
    border: 1px solid #d64541;
    border-radius: 10px;
    padding: 30px 40px;
    text-align: center;
}

.error-message {
    color: #ff9d96;
    margin: 12px 0 18px;
    font-size: 15px;
}

.retry-btn {
    background: #d64541;
    color: white;
    border: none;
    padding: 8px 24px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 14px;
}

.retry-btn:disabled {
    opacity: 0.5;
    cursor: default;
}

.heatmap-view {
    background: rgba(0, 0, 0, 0.35);
    border: 1px solid #4a5d73;
    border-radius: 10px;
    padding: 20px;
    max-width: 100%;
    overflow-x: auto;
}

.heatmap-title {
    display: flex;
    align-items: baseline;
    gap: 12px;
    margin-bottom: 10px;
}

.lens-label {
    color: #f39c12;
    font-size: 13px;
    font-weight: bold;
}

.summary {
    display: flex;
    gap: 30px;
    margin-bottom: 15px;
}

.summary-item {
    text-align: center;
}

.summary-value {
    font-size: 16px;
    font-weight: 700;
    font-family: 'Courier New', monospace;
}

.summary-label {
    font-size: 11px;
    color: #a0a0a0;
    margin-top: 3px;
}

.heatmap-table {
    border-collapse: collapse;
    font-family: 'Courier New', monospace;
    font-size: 12px;
}

.heatmap-table th {
    padding: 6px 8px;
    color: #a0a0a0;
    font-weight: normal;
}

.year-col {
    color: #e0e0e0;
    font-weight: bold;
}

.cell {
    padding: 6px 8px;
    text-align: right;
    min-width: 52px;
    border: 1px solid rgba(255, 255, 255, 0.06);
}
"#;
