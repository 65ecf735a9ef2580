use crate::domain::heatmap::{ForwardPeriod, HeatmapPayload, IndexName};

/// Interface to the heatmap backend. Errors are already collapsed into the
/// user-displayable string by the implementation; the controller stores them
/// as-is.
///
/// Single-threaded wasm consumer, so the futures carry no Send bound.
#[allow(async_fn_in_trait)]
pub trait HeatmapApi {
    /// Ordered index catalog from `GET /indices`.
    async fn fetch_indices(&self) -> Result<Vec<IndexName>, String>;

    /// Full payload for one (index, period) pair from `GET /heatmap/{index}`.
    /// `period == None` requests the default current/MoM lens.
    async fn fetch_heatmap(
        &self,
        index: &IndexName,
        period: Option<ForwardPeriod>,
    ) -> Result<HeatmapPayload, String>;
}
