use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Year -> month -> cell, both keys the backend's stringified numbers
/// ("2024", "7"). `None` cells are months the backend could not compute.
pub type ReturnMatrix = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// Same shape with 1-based rank positions instead of returns.
pub type RankMatrix = BTreeMap<String, BTreeMap<String, Option<u32>>>;

/// Domain entity - everything the backend computes for one (index, period)
/// pair. Passed through to presentation verbatim; the controller interprets
/// none of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPayload {
    pub index: String,
    /// MoM returns, or forward returns when a `forward_period` was requested.
    pub heatmap: ReturnMatrix,
    /// Monthly average prices.
    pub monthly_price: ReturnMatrix,
    /// Always the MoM returns regardless of the requested lens.
    pub monthly_profits: ReturnMatrix,
    pub avg_monthly_profits_3y: Option<f64>,
    pub rank_percentile_4y: Option<f64>,
    pub inverse_rank_percentile: Option<f64>,
    /// Despite the backend field name these are 1-based rank positions.
    pub monthly_rank_percentile: RankMatrix,
}

impl HeatmapPayload {
    /// Years of the main matrix, newest first.
    pub fn years_desc(&self) -> Vec<String> {
        years_desc(&self.heatmap)
    }
}

/// Matrix years ordered numerically descending. `BTreeMap` iteration is
/// lexicographic, which misorders numeric keys ("10" < "2"), so presentation
/// must come through here instead of iterating the map directly.
pub fn years_desc<V>(matrix: &BTreeMap<String, BTreeMap<String, Option<V>>>) -> Vec<String> {
    let mut years: Vec<String> = matrix.keys().cloned().collect();
    years.sort_by_key(|y| std::cmp::Reverse(y.parse::<i32>().unwrap_or(i32::MIN)));
    years
}

/// Cell lookup by numeric month (1..=12).
pub fn month_value<V: Copy>(
    matrix: &BTreeMap<String, BTreeMap<String, Option<V>>>,
    year: &str,
    month: u32,
) -> Option<V> {
    matrix.get(year)?.get(&month.to_string()).copied().flatten()
}
