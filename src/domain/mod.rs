pub mod errors;
pub mod heatmap;
pub mod logging;
pub mod state;
