//! Context window extraction over an assembly listing.

use crate::parser::Trace;
use crate::utils::config::{DEFAULT_LINES_ABOVE, DEFAULT_LINES_BELOW};
use crate::utils::error::AssemblyError;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Number of listing lines kept around each match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    pub lines_above: usize,
    pub lines_below: usize,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self {
            lines_above: DEFAULT_LINES_ABOVE,
            lines_below: DEFAULT_LINES_BELOW,
        }
    }
}

impl ContextWindow {
    pub fn new(lines_above: usize, lines_below: usize) -> Self {
        Self {
            lines_above,
            lines_below,
        }
    }
}

/// Instruction addresses of the tool entries whose memory address is in `addresses`
///
/// Formatted as lowercase hex without a prefix, the way objdump prints the
/// first column of a listing.
pub fn instruction_targets(tool: &Trace, addresses: &[u64]) -> BTreeSet<String> {
    let wanted: HashSet<u64> = addresses.iter().copied().collect();

    tool.entries
        .iter()
        .filter(|entry| wanted.contains(&entry.address))
        .filter_map(|entry| entry.instruction)
        .map(|ins| format!("{:x}", ins))
        .collect()
}

/// Extract a context block for every line whose first token contains a target
///
/// `lines` keep their original line endings; each block is the concatenation
/// of `lines_above` lines before the match through `lines_below` lines after.
pub fn extract_context<S: AsRef<str>>(
    targets: &BTreeSet<String>,
    lines: &[S],
    window: ContextWindow,
) -> Vec<String> {
    let total = lines.len();
    let step = (total / 100).max(1);
    let mut blocks = Vec::new();

    for (line_number, line) in lines.iter().enumerate() {
        if line_number % step == 0 {
            debug!(
                "{:.2} percent complete",
                (line_number as f64 / total as f64) * 100.0
            );
        }

        let Some(first_token) = line.as_ref().split_whitespace().next() else {
            continue;
        };

        if targets.iter().any(|addr| first_token.contains(addr.as_str())) {
            let start = line_number.saturating_sub(window.lines_above);
            let end = total.min(line_number + window.lines_below + 1);
            let block: String = lines[start..end].iter().map(|l| l.as_ref()).collect();
            blocks.push(block);
        }
    }

    blocks
}

/// Read a listing from disk and extract context blocks
pub fn extract_context_from_file(
    targets: &BTreeSet<String>,
    listing_path: impl AsRef<Path>,
    window: ContextWindow,
) -> Result<Vec<String>, AssemblyError> {
    let listing_path = listing_path.as_ref();

    let contents = fs::read_to_string(listing_path).map_err(|source| AssemblyError::Io {
        path: listing_path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = contents.split_inclusive('\n').collect();
    debug!(
        "Scanning {} listing lines for {} targets",
        lines.len(),
        targets.len()
    );

    Ok(extract_context(targets, &lines, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{LogFormat, TraceEntry};

    fn targets(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_window_clamped_at_start() {
        let lines = ["a1: x\n", "b2: y\n", "c3: z\n"];
        let blocks = extract_context(&targets(&["a1"]), &lines, ContextWindow::new(5, 1));
        assert_eq!(blocks, vec!["a1: x\nb2: y\n".to_string()]);
    }

    #[test]
    fn test_window_clamped_at_end() {
        let lines = ["a1: x\n", "b2: y\n", "c3: z\n"];
        let blocks = extract_context(&targets(&["c3"]), &lines, ContextWindow::new(1, 10));
        assert_eq!(blocks, vec!["b2: y\nc3: z\n".to_string()]);
    }

    #[test]
    fn test_only_first_token_is_matched() {
        let lines = ["1000: call 4a5b\n", "4a5b: ret\n"];
        let blocks = extract_context(&targets(&["4a5b"]), &lines, ContextWindow::new(0, 0));
        assert_eq!(blocks, vec!["4a5b: ret\n".to_string()]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = ["\n", "   \n"];
        let blocks = extract_context(&targets(&[""]), &lines, ContextWindow::default());
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_instruction_targets() {
        let mut tool = Trace::new(LogFormat::AutoBase);
        tool.entries.push(TraceEntry::new(0x10).with_instruction(0x4a5b));
        tool.entries.push(TraceEntry::new(0x20).with_instruction(0x4c00));
        tool.entries.push(TraceEntry::new(0x10));

        let found = instruction_targets(&tool, &[0x10]);
        assert_eq!(found, targets(&["4a5b"]));
    }
}
