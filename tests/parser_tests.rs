use bytecode_trace_diff::parser::{read_debug_trace, read_tool_trace, LogFormat, TraceEntry};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_read_debug_trace_skips_noise() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("debug.out");
    fs::write(&path, "index address\n0 7f001a\n\n1 not_hex\n2 0x7f002b\n").unwrap();

    let trace = read_debug_trace(&path).unwrap();

    assert_eq!(trace.format, LogFormat::Hex);
    assert_eq!(trace.addresses(), vec![0x7f001a, 0x7f002b]);
    assert_eq!(trace.skipped_lines, 3);
}

#[test]
fn test_read_tool_trace_pin_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tool.out");
    fs::write(
        &path,
        "MemoryAddress: 0x7f001a InsAddress: 0x55d0\nMemoryAddress: 0x7f002b InsAddress: 0x55e4\n",
    )
    .unwrap();

    let trace = read_tool_trace(&path).unwrap();

    assert_eq!(
        trace.entries,
        vec![
            TraceEntry::new(0x7f001a).with_instruction(0x55d0),
            TraceEntry::new(0x7f002b).with_instruction(0x55e4),
        ]
    );
}

#[test]
fn test_read_tool_trace_mixed_bases() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tool.out");
    fs::write(&path, "a 0x10\nb 0o20\nc 0b11\nd 42\ne 1a\n").unwrap();

    let trace = read_tool_trace(&path).unwrap();

    assert_eq!(trace.addresses(), vec![16, 16, 3, 42]);
    assert_eq!(trace.skipped_lines, 1);
}

#[test]
fn test_read_missing_file_fails() {
    let result = read_debug_trace("/nonexistent/debug.out");
    assert!(result.is_err());
}

#[test]
fn test_read_empty_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("empty.out");
    fs::write(&path, "").unwrap();

    let trace = read_debug_trace(&path).unwrap();
    assert!(trace.is_empty());
}
