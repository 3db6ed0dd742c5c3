//! Bytecode Trace Diff CLI
//!
//! Compares a detection tool's trace against a reference debug trace and
//! writes a percentage report and scatter plots.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use bytecode_trace_diff::assembly::ContextWindow;
use bytecode_trace_diff::commands::{execute_analyze, validate_args, AnalyzeArgs};
use bytecode_trace_diff::plot::{load_plot_config, PlotConfig};
use bytecode_trace_diff::utils::config::{
    DEFAULT_LINES_ABOVE, DEFAULT_LINES_BELOW, DEFAULT_OUTPUT_DIR,
};

/// Bytecode Trace Diff - validate bytecode-access detection against a debug trace
#[derive(Parser, Debug)]
#[command(name = "bytecode-trace-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log written by the detection tool
    tool_output_file: PathBuf,

    /// Reference debug log
    debug_output_file: PathBuf,

    /// Base name for the report and plot files
    output_name: String,

    /// Assembly listing to extract instruction context from (optional)
    assembly_file_path: Option<PathBuf>,

    /// Directory all outputs are written into
    #[arg(short = 'd', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Listing lines kept above each match
    #[arg(long, default_value_t = DEFAULT_LINES_ABOVE)]
    lines_above: usize,

    /// Listing lines kept below each match
    #[arg(long, default_value_t = DEFAULT_LINES_BELOW)]
    lines_below: usize,

    /// TOML file overriding plot options
    #[arg(long)]
    plot_config: Option<PathBuf>,

    /// Also write a JSON summary
    #[arg(long)]
    json: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let plot_config = match &cli.plot_config {
        Some(path) => load_plot_config(path)
            .with_context(|| format!("Failed to load plot config {}", path.display()))?,
        None => PlotConfig::default(),
    };

    let args = AnalyzeArgs {
        tool_log: cli.tool_output_file,
        debug_log: cli.debug_output_file,
        output_name: cli.output_name,
        output_dir: cli.output_dir,
        assembly_listing: cli.assembly_file_path,
        context_window: ContextWindow::new(cli.lines_above, cli.lines_below),
        plot_config,
        write_json: cli.json,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_analyze(args)?;

    Ok(())
}
