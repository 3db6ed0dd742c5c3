//! Output writers for analysis results.
//!
//! This module handles writing data to disk in various formats:
//! - Text percentage report
//! - JSON summary
//! - Assembly context blocks
//! - Terminal summary (stdout)

pub mod json;
pub mod report;
pub mod terminal;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{read_summary, write_summary, AnalysisSummary};
pub use report::{render_report, write_context_file, write_report};
pub use terminal::render_terminal_summary;

/// Validate that output path is writable
///
/// Rejects empty paths and paths pointing at an existing directory.
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate the path and create its parent directories if needed
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Format an address the way every report prints it
pub fn format_address(address: u64) -> String {
    format!("{:#x}", address)
}
