//! Bytecode Trace Diff
//!
//! Compares the memory reads reported by a bytecode-access detection tool
//! against a reference debug trace. Produces difference statistics, a
//! per-address alignment, scatter plots and, optionally, assembly context
//! for the instructions behind unmatched reads.
//!
//! This crate provides the core implementation for the
//! `bytecode-trace-diff` CLI tool.

pub mod aggregator;
pub mod assembly;
pub mod commands;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;
