use crate::domain::heatmap::{ForwardPeriod, HeatmapPayload, IndexName};
use crate::domain::state::RequestState;
use leptos::*;
use once_cell::sync::OnceCell;

/// Read side of the dashboard: presentation renders from these signals, the
/// controller (via `app::dispatch`) is the only writer.
pub struct Globals {
    pub catalog: RwSignal<RequestState<Vec<IndexName>>>,
    pub heatmap: RwSignal<RequestState<HeatmapPayload>>,
    pub selected_index: RwSignal<Option<IndexName>>,
    pub selected_period: RwSignal<Option<ForwardPeriod>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        catalog: create_rw_signal(RequestState::Idle),
        heatmap: create_rw_signal(RequestState::Idle),
        selected_index: create_rw_signal(None),
        selected_period: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub catalog_state => catalog: RequestState<Vec<IndexName>>,
    pub heatmap_state => heatmap: RequestState<HeatmapPayload>,
    pub selected_index => selected_index: Option<IndexName>,
    pub selected_period => selected_period: Option<ForwardPeriod>,
}
