//! Trace log parsing and data types.
//!
//! This module handles:
//! - Reading debug logs (hexadecimal address column)
//! - Reading tool logs (auto-detected base, optional instruction column)
//! - Skipping unparseable lines

pub mod schema;
pub mod trace_log;

// Re-export main types
pub use schema::{LogFormat, Trace, TraceEntry};
pub use trace_log::{
    parse_address, parse_trace_line, parse_trace_str, read_debug_trace, read_tool_trace,
    read_trace,
};
