//! Greedy sequential alignment of the debug trace against the tool trace.
//!
//! A cursor walks the tool trace. Each debug address either consumes the
//! tool entry under the cursor (matched) or leaves the cursor in place
//! (debug-only). Extra or reordered tool entries are not recovered from and
//! cascade into debug-only classifications.

use log::debug;

/// Per-index classification of the debug trace
///
/// Both vectors have the debug trace's length and exactly one of
/// `matched[i]` / `debug_only[i]` is `Some` at every index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub matched: Vec<Option<u64>>,
    pub debug_only: Vec<Option<u64>>,

    /// Tool entries consumed by the cursor
    pub tool_consumed: usize,
}

impl ClassificationResult {
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.iter().flatten().count()
    }

    pub fn debug_only_count(&self) -> usize {
        self.debug_only.iter().flatten().count()
    }

    /// `(position, address)` pairs of matched entries
    pub fn matched_points(&self) -> Vec<(u64, u64)> {
        to_points(&self.matched)
    }

    /// `(position, address)` pairs of debug-only entries
    pub fn debug_only_points(&self) -> Vec<(u64, u64)> {
        to_points(&self.debug_only)
    }

    /// Matched addresses with `0` in unmatched slots
    pub fn matched_zero_filled(&self) -> Vec<u64> {
        self.matched.iter().map(|slot| slot.unwrap_or(0)).collect()
    }

    /// Debug-only addresses with `0` in matched slots
    pub fn debug_only_zero_filled(&self) -> Vec<u64> {
        self.debug_only.iter().map(|slot| slot.unwrap_or(0)).collect()
    }
}

fn to_points(slots: &[Option<u64>]) -> Vec<(u64, u64)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.map(|address| (i as u64, address)))
        .collect()
}

/// Classify each debug address as matched or debug-only
pub fn classify(debug_trace: &[u64], tool_trace: &[u64]) -> ClassificationResult {
    let total = debug_trace.len();
    let mut matched = vec![None; total];
    let mut debug_only = vec![None; total];
    let mut cursor = 0;
    let step = (total / 10).max(1);

    for (i, &address) in debug_trace.iter().enumerate() {
        if i % step == 0 {
            debug!("Progress: {:.2}%", (i as f64 / total as f64) * 100.0);
        }

        if tool_trace.get(cursor) == Some(&address) {
            matched[i] = Some(address);
            cursor += 1;
        } else {
            debug_only[i] = Some(address);
        }
    }

    ClassificationResult {
        matched,
        debug_only,
        tool_consumed: cursor,
    }
}
