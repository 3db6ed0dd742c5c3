//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args, AnalysisOutcome};
pub use models::AnalyzeArgs;
