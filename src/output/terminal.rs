//! Terminal output rendering for analysis results.

use crate::aggregator::{ClassificationResult, MultisetDiff};
use colored::*;

/// Render a human-readable summary for the terminal
pub fn render_terminal_summary(diff: &MultisetDiff, classification: &ClassificationResult) -> String {
    let mut out = String::new();

    out.push_str(&render_header());
    out.push_str(&render_totals(diff));
    out.push_str(&render_alignment(classification));
    out.push_str(&render_status(diff));

    out
}

fn render_header() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Trace Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out
}

fn render_totals(diff: &MultisetDiff) -> String {
    format!(
        "Debug addresses: {}\nTool addresses:  {}\nLeft of debug:   {} ({:.2}%)\nLeft of tool:    {} ({:.2}%)\nDistinct debug addresses missing from tool: {}\n",
        diff.debug_total,
        diff.tool_total,
        diff.debug_only.len(),
        diff.debug_only_percentage(),
        diff.tool_only.len(),
        diff.tool_only_percentage(),
        diff.missing_distinct.len()
    )
}

fn render_alignment(classification: &ClassificationResult) -> String {
    format!(
        "\nAligned: {} found in both, {} only in debug\n",
        classification.matched_count(),
        classification.debug_only_count()
    )
}

fn render_status(diff: &MultisetDiff) -> String {
    let mut out = String::new();
    out.push_str("---------------------------------------------------\n");
    let status = if diff.is_identical() {
        "STATUS: traces match".green().bold()
    } else if diff.debug_only.is_empty() {
        "STATUS: tool reports extra addresses".yellow().bold()
    } else {
        "STATUS: tool missed debug addresses".red().bold()
    };
    out.push_str(&status.to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{classify, compute_diff};

    #[test]
    fn test_render_terminal_summary_counts() {
        colored::control::set_override(false);
        let debug = [1, 2, 3];
        let tool = [1, 3];
        let out = render_terminal_summary(&compute_diff(&debug, &tool), &classify(&debug, &tool));

        assert!(out.contains("Debug addresses: 3"));
        assert!(out.contains("Aligned: 2 found in both, 1 only in debug"));
        assert!(out.contains("STATUS: tool missed debug addresses"));
    }
}
