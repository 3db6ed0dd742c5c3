//! Scatter plot rendering of the alignment classification.
//!
//! Two PNG images are produced per run:
//! - `<name>_all.png`: matched and debug-only points together
//! - `<name>_only_debug.png`: debug-only points alone
//!
//! X is the position in the debug trace, Y the address with hex tick labels.

use crate::aggregator::ClassificationResult;
use crate::output::prepare_output_path;
use crate::parser::{parse_address, LogFormat};
use crate::utils::config::{
    ALL_PLOT_SUFFIX, DEFAULT_OUTPUT_DIR, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH,
    ONLY_DEBUG_PLOT_SUFFIX, THRESHOLD_ADDRESS_LITERAL,
};
use crate::utils::error::{ConfigError, PlotError};
use log::{debug, info};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure width in pixels
    pub width: u32,

    /// Figure height in pixels
    pub height: u32,

    /// RGB colour of matched points
    pub matched_color: [u8; 3],

    /// RGB colour of debug-only points
    pub debug_only_color: [u8; 3],

    /// Marker radius of matched points
    pub matched_marker_size: u32,

    /// Marker radius of debug-only points
    pub debug_only_marker_size: u32,

    pub all_title: String,
    pub only_debug_title: String,
    pub x_label: String,
    pub y_label: String,

    /// Directory plots are written into
    pub output_dir: PathBuf,

    /// Reference address drawn as a guide line when inside the plotted range
    pub threshold_address: Option<u64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            matched_color: [0, 0, 255],
            debug_only_color: [255, 0, 0],
            matched_marker_size: 1,
            debug_only_marker_size: 1,
            all_title: "Detected Bytecode Accesses".to_string(),
            only_debug_title: "Non-detected Bytecode Accesses".to_string(),
            x_label: "Sequential Order".to_string(),
            y_label: "Memory Address (Hexadecimal)".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threshold_address: parse_address(THRESHOLD_ADDRESS_LITERAL, LogFormat::AutoBase),
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_threshold(mut self, threshold_address: Option<u64>) -> Self {
        self.threshold_address = threshold_address;
        self
    }

    fn validate(&self) -> Result<(), PlotError> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidConfig(format!(
                "figure size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Load plot overrides from a TOML file
///
/// Missing keys keep their defaults.
pub fn load_plot_config(path: impl AsRef<Path>) -> Result<PlotConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PlotConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Paths of the images written by [`ScatterRenderer::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPlots {
    pub all: PathBuf,
    pub only_debug: PathBuf,
}

/// One coloured point set on a chart
struct Series<'a> {
    points: &'a [(u64, u64)],
    color: RGBColor,
    marker_size: u32,
}

/// Renders classification scatter plots according to a [`PlotConfig`]
#[derive(Debug, Clone)]
pub struct ScatterRenderer {
    config: PlotConfig,
}

impl ScatterRenderer {
    pub fn new(config: PlotConfig) -> Result<Self, PlotError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Write both plots for `output_name`
    pub fn render(
        &self,
        output_name: &str,
        result: &ClassificationResult,
    ) -> Result<RenderedPlots, PlotError> {
        Ok(RenderedPlots {
            all: self.render_all(output_name, result)?,
            only_debug: self.render_only_debug(output_name, result)?,
        })
    }

    /// Matched points and debug-only points on one chart
    pub fn render_all(
        &self,
        output_name: &str,
        result: &ClassificationResult,
    ) -> Result<PathBuf, PlotError> {
        let path = self.output_path(output_name, ALL_PLOT_SUFFIX);
        let matched = result.matched_points();
        let debug_only = result.debug_only_points();

        let series = [
            Series {
                points: &matched,
                color: rgb(self.config.matched_color),
                marker_size: self.config.matched_marker_size,
            },
            Series {
                points: &debug_only,
                color: rgb(self.config.debug_only_color),
                marker_size: self.config.debug_only_marker_size,
            },
        ];

        self.draw_scatter(&path, &self.config.all_title, result.len(), &series)?;
        Ok(path)
    }

    /// Debug-only points alone
    pub fn render_only_debug(
        &self,
        output_name: &str,
        result: &ClassificationResult,
    ) -> Result<PathBuf, PlotError> {
        let path = self.output_path(output_name, ONLY_DEBUG_PLOT_SUFFIX);
        let debug_only = result.debug_only_points();

        let series = [Series {
            points: &debug_only,
            color: rgb(self.config.debug_only_color),
            marker_size: self.config.debug_only_marker_size,
        }];

        self.draw_scatter(&path, &self.config.only_debug_title, result.len(), &series)?;
        Ok(path)
    }

    fn output_path(&self, output_name: &str, suffix: &str) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}{}", output_name, suffix))
    }

    fn draw_scatter(
        &self,
        path: &Path,
        title: &str,
        trace_len: usize,
        series: &[Series<'_>],
    ) -> Result<(), PlotError> {
        prepare_output_path(path)?;

        let x_range = 0..(trace_len as u64).max(1);
        let y_range = address_range(series);
        let point_count: usize = series.iter().map(|s| s.points.len()).sum();

        info!("Rendering {} points to {}", point_count, path.display());

        let root = BitMapBackend::new(path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(120)
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .map_err(backend_error)?;

        chart
            .configure_mesh()
            .x_desc(self.config.x_label.as_str())
            .y_desc(self.config.y_label.as_str())
            .y_label_formatter(&|y| format!("{:#x}", y))
            .draw()
            .map_err(backend_error)?;

        if let Some(threshold) = self.config.threshold_address {
            if y_range.contains(&threshold) {
                debug!("Drawing threshold guide at {:#x}", threshold);
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![(x_range.start, threshold), (x_range.end, threshold)],
                        BLACK.mix(0.3),
                    )))
                    .map_err(backend_error)?;
            }
        }

        for s in series {
            let style = s.color.filled();
            chart
                .draw_series(
                    s.points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), s.marker_size, style)),
                )
                .map_err(backend_error)?;
        }

        root.present().map_err(backend_error)?;

        Ok(())
    }
}

/// Y range covering every point, never empty
fn address_range(series: &[Series<'_>]) -> Range<u64> {
    let mut addresses = series.iter().flat_map(|s| s.points.iter().map(|p| p.1));

    let Some(first) = addresses.next() else {
        return 0..1;
    };

    let (min, max) = addresses.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a)));
    min..max.saturating_add(1)
}

fn rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

fn backend_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Backend(err.to_string())
}
