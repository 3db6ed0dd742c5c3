//! Assembly listing context extraction.
//!
//! Given instruction addresses, finds the listing lines whose first column
//! mentions one of them and collects the surrounding lines.

pub mod context;

// Re-export main types and functions
pub use context::{
    extract_context, extract_context_from_file, instruction_targets, ContextWindow,
};
