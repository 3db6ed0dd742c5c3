//! Trace data types shared by the reader, aggregator and outputs.

use std::fmt;

/// Numeric base used for the address column of a log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Debug log: address column is always hexadecimal (`0x` optional)
    Hex,

    /// Tool log: base detected from the `0x`/`0o`/`0b` prefix, decimal otherwise
    AutoBase,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Hex => write!(f, "hex"),
            LogFormat::AutoBase => write!(f, "auto-base"),
        }
    }
}

/// One parsed log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    /// Memory address read
    pub address: u64,

    /// Address of the instruction that performed the read, if logged
    pub instruction: Option<u64>,
}

impl TraceEntry {
    pub fn new(address: u64) -> Self {
        Self {
            address,
            instruction: None,
        }
    }

    pub fn with_instruction(mut self, instruction: u64) -> Self {
        self.instruction = Some(instruction);
        self
    }
}

/// An ordered sequence of trace entries in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub format: LogFormat,
    pub entries: Vec<TraceEntry>,

    /// Lines that did not yield an address
    pub skipped_lines: usize,
}

impl Trace {
    pub fn new(format: LogFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
            skipped_lines: 0,
        }
    }

    /// Build a trace directly from addresses (no instruction column)
    pub fn from_addresses(format: LogFormat, addresses: &[u64]) -> Self {
        Self {
            format,
            entries: addresses.iter().copied().map(TraceEntry::new).collect(),
            skipped_lines: 0,
        }
    }

    /// Addresses in file order
    pub fn addresses(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.address).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
