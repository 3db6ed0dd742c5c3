use crate::assembly::ContextWindow;
use crate::plot::PlotConfig;
use crate::utils::config::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log written by the detection tool
    pub tool_log: PathBuf,

    /// Reference log
    pub debug_log: PathBuf,

    /// Base name of every output file
    pub output_name: String,

    /// Directory all outputs are written into
    pub output_dir: PathBuf,

    /// Assembly listing to extract context from (optional)
    pub assembly_listing: Option<PathBuf>,

    /// Context window around listing matches
    pub context_window: ContextWindow,

    /// Plot configuration (output_dir is overridden by `output_dir`)
    pub plot_config: PlotConfig,

    /// Also write a JSON summary
    pub write_json: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            tool_log: PathBuf::from("toolOutput.out"),
            debug_log: PathBuf::from("debugOutput.out"),
            output_name: "result".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assembly_listing: None,
            context_window: ContextWindow::default(),
            plot_config: PlotConfig::default(),
            write_json: false,
            print_summary: false,
        }
    }
}
