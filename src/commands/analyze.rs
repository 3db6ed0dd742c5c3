//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the debug and tool logs
//! 2. Computes multiset differences and writes the text report
//! 3. Classifies every debug address against the tool trace
//! 4. Renders the scatter plots
//! 5. Extracts assembly context (only when a listing is given)

use super::models::AnalyzeArgs;
use crate::aggregator::{classify, compute_diff, ClassificationResult, MultisetDiff};
use crate::assembly::{extract_context_from_file, instruction_targets};
use crate::output::{
    format_address, render_terminal_summary, write_context_file, write_report, write_summary,
    AnalysisSummary,
};
use crate::parser::{read_debug_trace, read_tool_trace, Trace};
use crate::plot::ScatterRenderer;
use crate::utils::config::{ASSEMBLY_CONTEXT_FILE, REPORT_SUFFIX, SUMMARY_SUFFIX};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Everything computed by one run, returned for callers and tests
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub diff: MultisetDiff,
    pub classification: ClassificationResult,
    pub context_blocks: Option<usize>,
}

/// Execute the analyze command
///
/// # Errors
/// * Unreadable input logs or listing
/// * File write or plot rendering errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<AnalysisOutcome> {
    let start_time = Instant::now();

    // Step 1: Read both logs
    info!("Step 1/5: Reading trace logs...");
    let debug_trace = read_debug_trace(&args.debug_log).context("Failed to read debug log")?;
    let tool_trace = read_tool_trace(&args.tool_log).context("Failed to read tool log")?;

    let debug_addresses = debug_trace.addresses();
    let tool_addresses = tool_trace.addresses();

    // Step 2: Multiset differences and report
    info!("Step 2/5: Computing multiset differences...");
    let diff = compute_diff(&debug_addresses, &tool_addresses);

    info!("{}", diff.summary());
    info!("Left of debug array: {:.2} %", diff.debug_only_percentage());
    info!("Left of tool array: {:.2} %", diff.tool_only_percentage());
    debug!(
        "Debug addresses absent from tool: {:?}",
        diff.missing_distinct
            .iter()
            .map(|a| format_address(*a))
            .collect::<Vec<_>>()
    );

    let report_path = args
        .output_dir
        .join(format!("{}{}", args.output_name, REPORT_SUFFIX));
    write_report(&diff, &report_path).context("Failed to write report")?;
    info!("✓ Report written to: {}", report_path.display());

    // Step 3: Alignment
    info!("Step 3/5: Aligning debug trace against tool trace...");
    let classification = classify(&debug_addresses, &tool_addresses);
    info!(
        "Both: {} | Only debug: {}",
        classification.matched_count(),
        classification.debug_only_count()
    );

    // Step 4: Plots
    info!("Step 4/5: Rendering plots...");
    let renderer = ScatterRenderer::new(
        args.plot_config
            .clone()
            .with_output_dir(args.output_dir.clone()),
    )
    .context("Invalid plot configuration")?;
    let plots = renderer
        .render(&args.output_name, &classification)
        .context("Failed to render plots")?;
    info!("✓ Plots written to: {} and {}", plots.all.display(), plots.only_debug.display());

    if args.write_json {
        let summary_path = args
            .output_dir
            .join(format!("{}{}", args.output_name, SUMMARY_SUFFIX));
        let summary = AnalysisSummary::new(&args.tool_log, &args.debug_log, &diff, &classification);
        write_summary(&summary, &summary_path).context("Failed to write JSON summary")?;
        info!("✓ Summary written to: {}", summary_path.display());
    }

    // Step 5: Assembly context (if requested)
    let context_blocks = match &args.assembly_listing {
        Some(listing) => {
            info!("Step 5/5: Extracting assembly context...");
            let count = extract_assembly(&args, listing, &tool_trace, &diff)?;
            Some(count)
        }
        None => {
            info!("Step 5/5: Skipping assembly context (no listing given)");
            None
        }
    };

    if args.print_summary {
        println!("{}", render_terminal_summary(&diff, &classification));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(AnalysisOutcome {
        diff,
        classification,
        context_blocks,
    })
}

/// Extract context for the instructions behind tool-only reads
///
/// **Private** - internal helper for execute_analyze
fn extract_assembly(
    args: &AnalyzeArgs,
    listing: &Path,
    tool_trace: &Trace,
    diff: &MultisetDiff,
) -> Result<usize> {
    let targets = instruction_targets(tool_trace, &diff.tool_only);
    if targets.is_empty() {
        warn!("No instruction addresses found for tool-only reads; context file will be empty");
    }
    debug!("Instruction targets: {:?}", targets);

    let blocks = extract_context_from_file(&targets, listing, args.context_window)
        .context("Failed to extract assembly context")?;

    let context_path = args.output_dir.join(ASSEMBLY_CONTEXT_FILE);
    write_context_file(&blocks, &context_path).context("Failed to write assembly context")?;
    info!("✓ Assembly context written to: {}", context_path.display());

    Ok(blocks.len())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.output_name.is_empty() {
        anyhow::bail!("Output name cannot be empty");
    }

    if args.output_name.contains('/') || args.output_name.contains('\\') {
        anyhow::bail!("Output name must not contain path separators");
    }

    if !args.tool_log.is_file() {
        anyhow::bail!("Tool log not found: {}", args.tool_log.display());
    }

    if !args.debug_log.is_file() {
        anyhow::bail!("Debug log not found: {}", args.debug_log.display());
    }

    if let Some(listing) = &args.assembly_listing {
        if !listing.is_file() {
            anyhow::bail!("Assembly listing not found: {}", listing.display());
        }
    }

    Ok(())
}
