//! JSON summary output writer.
//!
//! Writes the analysis summary to JSON files with proper formatting.

use super::{format_address, prepare_output_path};
use crate::aggregator::{ClassificationResult, MultisetDiff};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Schema version
    pub version: String,

    /// Path of the tool log
    pub tool_log: String,

    /// Path of the debug log
    pub debug_log: String,

    pub debug_total: usize,
    pub tool_total: usize,

    /// Size of `debug - tool`
    pub debug_only_count: usize,

    /// Size of `tool - debug`
    pub tool_only_count: usize,

    pub debug_only_percentage: f64,
    pub tool_only_percentage: f64,

    /// Alignment results
    pub aligned_matched: usize,
    pub aligned_debug_only: usize,

    /// Distinct debug addresses never seen by the tool, hex formatted
    pub missing_addresses: Vec<String>,

    /// ISO 8601 timestamp
    pub generated_at: String,
}

impl AnalysisSummary {
    pub fn new(
        tool_log: impl AsRef<Path>,
        debug_log: impl AsRef<Path>,
        diff: &MultisetDiff,
        classification: &ClassificationResult,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            tool_log: tool_log.as_ref().display().to_string(),
            debug_log: debug_log.as_ref().display().to_string(),
            debug_total: diff.debug_total,
            tool_total: diff.tool_total,
            debug_only_count: diff.debug_only.len(),
            tool_only_count: diff.tool_only.len(),
            debug_only_percentage: diff.debug_only_percentage(),
            tool_only_percentage: diff.tool_only_percentage(),
            aligned_matched: classification.matched_count(),
            aligned_debug_only: classification.debug_only_count(),
            missing_addresses: diff
                .missing_distinct
                .iter()
                .map(|a| format_address(*a))
                .collect(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write a summary to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &AnalysisSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());
    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a summary back from a JSON file
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<AnalysisSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: AnalysisSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(summary)
}
