pub mod dto;
pub mod heatmap_rest_client;

pub use heatmap_rest_client::*;
