//! Scatter plot visualisation of the alignment classification.
//!
//! Plot options are held in an explicit [`PlotConfig`] passed to a
//! [`ScatterRenderer`]; nothing is configured globally.

pub mod renderer;

// Re-export main types
pub use renderer::{load_plot_config, PlotConfig, RenderedPlots, ScatterRenderer};
