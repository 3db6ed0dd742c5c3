//! Plain-text report and assembly-context writers.

use super::{format_address, prepare_output_path};
use crate::aggregator::MultisetDiff;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the percentage report
///
/// The tool-only multiset difference is listed under the last header,
/// one address per line.
pub fn render_report(diff: &MultisetDiff) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Percentage of Addresses in 'debugOutput' not found in 'toolOutput': {:.2}\n",
        diff.debug_only_percentage()
    ));
    out.push_str(&format!(
        "Percentage of Addresses in 'toolOutput' not found in  'debugOutput': {:.2}\n",
        diff.tool_only_percentage()
    ));
    out.push_str("Lines in 'toolOutput' not found in 'debugOutput':\n");

    for address in &diff.tool_only {
        out.push_str(&format_address(*address));
        out.push('\n');
    }

    out
}

/// Write the percentage report to `output_path`
pub fn write_report(diff: &MultisetDiff, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());
    prepare_output_path(output_path)?;

    std::fs::write(output_path, render_report(diff))?;

    Ok(())
}

/// Write extracted context blocks, each followed by a blank line
pub fn write_context_file(
    blocks: &[String],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} context blocks to: {}",
        blocks.len(),
        output_path.display()
    );
    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for block in blocks {
        writer.write_all(block.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::compute_diff;

    #[test]
    fn test_render_report_lists_tool_only() {
        let diff = compute_diff(&[1, 2, 3, 4], &[1, 9]);
        let report = render_report(&diff);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[0],
            "Percentage of Addresses in 'debugOutput' not found in 'toolOutput': 75.00"
        );
        assert_eq!(
            lines[1],
            "Percentage of Addresses in 'toolOutput' not found in  'debugOutput': 50.00"
        );
        assert_eq!(lines[2], "Lines in 'toolOutput' not found in 'debugOutput':");
        assert_eq!(lines[3], "0x9");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_report_empty_traces() {
        let diff = compute_diff(&[], &[]);
        let report = render_report(&diff);
        assert!(report.contains("'toolOutput': 0.00"));
    }
}
