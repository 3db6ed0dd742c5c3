//! Plain-text trace log reader.
//!
//! Both logs carry the memory address in the second whitespace-separated
//! column. Anything that does not parse (headers, blank lines, noise) is
//! skipped without error; only an unreadable file is fatal.

use super::schema::{LogFormat, Trace, TraceEntry};
use crate::utils::config::{ADDRESS_TOKEN_INDEX, INSTRUCTION_TOKEN_INDEX};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Parse a single address token in the given log format
///
/// Returns `None` for anything that is not a non-negative integer
/// representable as `u64`.
pub fn parse_address(token: &str, format: LogFormat) -> Option<u64> {
    match format {
        LogFormat::Hex => {
            let digits = strip_prefix_ci(token, "0x").unwrap_or(token);
            parse_digits(digits, 16)
        }
        LogFormat::AutoBase => parse_auto_base(token),
    }
}

/// Parse one log line into an entry
///
/// The instruction column is only read for auto-base (tool) logs.
pub fn parse_trace_line(line: &str, format: LogFormat) -> Option<TraceEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let address = parse_address(tokens.get(ADDRESS_TOKEN_INDEX)?, format)?;

    let mut entry = TraceEntry::new(address);
    if format == LogFormat::AutoBase {
        if let Some(ins) = tokens
            .get(INSTRUCTION_TOKEN_INDEX)
            .and_then(|t| parse_address(t, format))
        {
            entry = entry.with_instruction(ins);
        }
    }

    Some(entry)
}

/// Parse the full contents of a log already held in memory
pub fn parse_trace_str(contents: &str, format: LogFormat) -> Trace {
    let mut trace = Trace::new(format);

    for line in contents.lines() {
        match parse_trace_line(line, format) {
            Some(entry) => trace.entries.push(entry),
            None => trace.skipped_lines += 1,
        }
    }

    trace
}

/// Read and parse a trace log from disk
///
/// # Errors
/// * `ParseError::Io` - the file cannot be opened or is not valid UTF-8
pub fn read_trace(path: impl AsRef<Path>, format: LogFormat) -> Result<Trace, ParseError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trace = parse_trace_str(&contents, format);

    info!(
        "Read {} addresses from {} ({} log)",
        trace.len(),
        path.display(),
        format
    );
    debug!("Skipped {} unparseable lines", trace.skipped_lines);

    Ok(trace)
}

/// Read the reference (debug) trace: hexadecimal address column
pub fn read_debug_trace(path: impl AsRef<Path>) -> Result<Trace, ParseError> {
    info!("Reading debug file");
    read_trace(path, LogFormat::Hex)
}

/// Read the tool trace: address column in auto-detected base
pub fn read_tool_trace(path: impl AsRef<Path>) -> Result<Trace, ParseError> {
    info!("Reading tool file");
    read_trace(path, LogFormat::AutoBase)
}

fn parse_auto_base(token: &str) -> Option<u64> {
    if let Some(digits) = strip_prefix_ci(token, "0x") {
        return parse_digits(digits, 16);
    }
    if let Some(digits) = strip_prefix_ci(token, "0o") {
        return parse_digits(digits, 8);
    }
    if let Some(digits) = strip_prefix_ci(token, "0b") {
        return parse_digits(digits, 2);
    }

    // Decimal literals may not carry leading zeros, except for zero itself
    let value = parse_digits(token, 10)?;
    let first_digit = token.chars().find(|c| *c != '_');
    if value != 0 && first_digit == Some('0') {
        return None;
    }
    Some(value)
}

/// Digits with optional single `_` separators between them
fn parse_digits(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    if digits.contains("__") {
        return None;
    }
    if !digits
        .chars()
        .all(|c| c == '_' || c.is_digit(radix))
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    u64::from_str_radix(&cleaned, radix).ok()
}

fn strip_prefix_ci<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    match token.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&token[prefix.len()..]),
        _ => None,
    }
}
