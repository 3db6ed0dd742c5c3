//! Comparison of the debug trace against the tool trace.
//!
//! This module produces:
//! - Multiset difference statistics (what each side has in excess)
//! - Per-index matched / debug-only classification

pub mod alignment;
pub mod multiset;

// Re-export main types and functions
pub use alignment::{classify, ClassificationResult};
pub use multiset::{compute_diff, count_occurrences, multiset_difference, percentage, MultisetDiff};
