use crate::domain::heatmap::{ForwardPeriod, HeatmapPayload, IndexName};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::state::{RequestState, Selection};

/// Network call the async layer must issue after a transition. At most one
/// per user intent; the controller never talks to the backend itself.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchCommand {
    Catalog,
    Heatmap { index: IndexName, period: Option<ForwardPeriod> },
}

/// Exclusive owner of the page state. Every user intent is a synchronous
/// method returning the fetch to issue (if any); every fetch completion comes
/// back through an `apply_*` method. Presentation only ever reads.
///
/// Overlapping heatmap fetches are not cancelled: completions are applied in
/// arrival order and the last one wins (see DESIGN.md).
#[derive(Debug, Default)]
pub struct DashboardController {
    catalog: RequestState<Vec<IndexName>>,
    selection: Selection,
    heatmap: RequestState<HeatmapPayload>,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &RequestState<Vec<IndexName>> {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn heatmap(&self) -> &RequestState<HeatmapPayload> {
        &self.heatmap
    }

    /// First activation: kick off the catalog fetch. Idempotent while the
    /// catalog is loading or already loaded.
    pub fn initialize(&mut self) -> Option<FetchCommand> {
        if self.catalog.is_loading() || self.catalog.is_success() {
            return None;
        }
        get_logger().info(LogComponent::Application("Dashboard"), "Loading index catalog");
        self.catalog = RequestState::Loading;
        Some(FetchCommand::Catalog)
    }

    /// User picked an index (or the empty placeholder). The placeholder
    /// clears the heatmap without touching the network.
    pub fn select_index(&mut self, index: Option<IndexName>) -> Option<FetchCommand> {
        self.selection.index = index.clone();
        match index {
            None => {
                self.heatmap = RequestState::Idle;
                None
            }
            Some(index) => Some(self.start_heatmap_fetch(index)),
        }
    }

    /// User picked a return-period lens. Re-fetches only when an index is
    /// selected; otherwise the stored period just waits for one.
    pub fn select_period(&mut self, period: Option<ForwardPeriod>) -> Option<FetchCommand> {
        self.selection.period = period;
        let index = self.selection.index.clone()?;
        Some(self.start_heatmap_fetch(index))
    }

    /// Re-issue whichever fetch last mattered. No-op while anything is in
    /// flight; the error panel's button stays inert until then.
    pub fn retry(&mut self) -> Option<FetchCommand> {
        if self.catalog.is_loading() || self.heatmap.is_loading() {
            return None;
        }
        if !self.catalog.is_success() {
            self.catalog = RequestState::Loading;
            return Some(FetchCommand::Catalog);
        }
        let index = self.selection.index.clone()?;
        Some(self.start_heatmap_fetch(index))
    }

    pub fn apply_catalog(&mut self, result: Result<Vec<IndexName>, String>) {
        self.catalog = match result {
            Ok(indices) => {
                get_logger().info(
                    LogComponent::Application("Dashboard"),
                    &format!("✅ Catalog loaded: {} indices", indices.len()),
                );
                RequestState::Success(indices)
            }
            Err(message) => {
                get_logger().error(
                    LogComponent::Application("Dashboard"),
                    &format!("❌ Catalog fetch failed: {message}"),
                );
                RequestState::Error(message)
            }
        };
    }

    pub fn apply_heatmap(&mut self, result: Result<HeatmapPayload, String>) {
        // A completion can outlive its selection: the user may have switched
        // back to the placeholder while the request was in flight. Dropping it
        // keeps the "no index, no payload" invariant.
        if self.selection.index.is_none() {
            get_logger().debug(
                LogComponent::Application("Dashboard"),
                "Dropping heatmap completion for a cleared selection",
            );
            return;
        }
        self.heatmap = match result {
            Ok(payload) => {
                get_logger().info(
                    LogComponent::Application("Dashboard"),
                    &format!("✅ Heatmap loaded for {}", payload.index),
                );
                RequestState::Success(payload)
            }
            Err(message) => {
                get_logger().error(
                    LogComponent::Application("Dashboard"),
                    &format!("❌ Heatmap fetch failed: {message}"),
                );
                RequestState::Error(message)
            }
        };
    }

    fn start_heatmap_fetch(&mut self, index: IndexName) -> FetchCommand {
        get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!(
                "Fetching heatmap for {} ({})",
                index.value(),
                self.selection.period.map_or("current", |p| p.as_str())
            ),
        );
        // Entering Loading wipes any previous error or stale payload.
        self.heatmap = RequestState::Loading;
        FetchCommand::Heatmap { index, period: self.selection.period }
    }
}
