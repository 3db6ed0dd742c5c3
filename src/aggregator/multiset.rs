//! Count-aware differences between the debug and tool traces.
//!
//! A value present `n` times in A and `m` times in B contributes
//! `max(n - m, 0)` occurrences to `A - B`.

use log::debug;
use std::collections::BTreeMap;

/// Frequency count of every value in a sequence
pub fn count_occurrences(values: &[u64]) -> BTreeMap<u64, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    counts
}

/// Multiset difference `a - b`, sorted ascending
pub fn multiset_difference(
    a: &BTreeMap<u64, usize>,
    b: &BTreeMap<u64, usize>,
) -> Vec<u64> {
    let mut result = Vec::new();
    for (value, count) in a {
        let other = b.get(value).copied().unwrap_or(0);
        let excess = count.saturating_sub(other);
        result.extend(std::iter::repeat(*value).take(excess));
    }
    result
}

/// Compute all difference statistics between two traces
pub fn compute_diff(debug_addresses: &[u64], tool_addresses: &[u64]) -> MultisetDiff {
    let debug_counts = count_occurrences(debug_addresses);
    let tool_counts = count_occurrences(tool_addresses);

    let debug_only = multiset_difference(&debug_counts, &tool_counts);
    let tool_only = multiset_difference(&tool_counts, &debug_counts);

    let missing_distinct: Vec<u64> = debug_counts
        .keys()
        .filter(|value| !tool_counts.contains_key(value))
        .copied()
        .collect();

    debug!(
        "Multiset diff: {} distinct debug values, {} distinct tool values",
        debug_counts.len(),
        tool_counts.len()
    );

    MultisetDiff {
        debug_total: debug_addresses.len(),
        tool_total: tool_addresses.len(),
        debug_only,
        tool_only,
        missing_distinct,
    }
}

/// Percentage of `part` in `total`, rounded to two decimals.
/// An empty total is reported as 0%.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = part as f64 / total as f64;
    (ratio * 10_000.0).round() / 100.0
}

/// Difference statistics between the debug and tool traces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultisetDiff {
    /// Number of addresses in the debug trace
    pub debug_total: usize,

    /// Number of addresses in the tool trace
    pub tool_total: usize,

    /// `debug - tool`, sorted
    pub debug_only: Vec<u64>,

    /// `tool - debug`, sorted
    pub tool_only: Vec<u64>,

    /// Distinct debug values never seen in the tool trace, sorted
    pub missing_distinct: Vec<u64>,
}

impl MultisetDiff {
    /// Share of debug addresses not found in the tool trace
    pub fn debug_only_percentage(&self) -> f64 {
        percentage(self.debug_only.len(), self.debug_total)
    }

    /// Share of tool addresses not found in the debug trace
    pub fn tool_only_percentage(&self) -> f64 {
        percentage(self.tool_only.len(), self.tool_total)
    }

    /// True when both traces hold the same multiset of addresses
    pub fn is_identical(&self) -> bool {
        self.debug_only.is_empty() && self.tool_only.is_empty()
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Debug: {} | Tool: {} | Left of debug: {} ({:.2}%) | Left of tool: {} ({:.2}%)",
            self.debug_total,
            self.tool_total,
            self.debug_only.len(),
            self.debug_only_percentage(),
            self.tool_only.len(),
            self.tool_only_percentage()
        )
    }
}
