use bytecode_trace_diff::aggregator::{classify, compute_diff};
use bytecode_trace_diff::assembly::{extract_context, ContextWindow};
use bytecode_trace_diff::output::{
    read_summary, validate_path, write_context_file, write_report, write_summary,
    AnalysisSummary,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[test]
fn test_write_report_contents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested/run.txt");

    let diff = compute_diff(&[0x1a, 0x2b, 0x1a], &[0x1a, 0x1a]);
    write_report(&diff, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Percentage of Addresses in 'debugOutput' not found in 'toolOutput': 33.33\n\
         Percentage of Addresses in 'toolOutput' not found in  'debugOutput': 0.00\n\
         Lines in 'toolOutput' not found in 'debugOutput':\n"
    );
}

#[test]
fn test_write_and_read_summary() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("run.json");

    let debug = [0x1, 0x2];
    let tool = [0x1];
    let summary = AnalysisSummary::new(
        "tool.out",
        "debug.out",
        &compute_diff(&debug, &tool),
        &classify(&debug, &tool),
    );

    write_summary(&summary, &path).unwrap();
    let loaded = read_summary(&path).unwrap();

    assert_eq!(loaded, summary);
    assert_eq!(loaded.debug_only_percentage, 50.0);
}

#[test]
fn test_context_file_blank_line_separated() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("assembly_context.txt");

    let blocks = vec!["a: x\nb: y\n".to_string(), "c: z\n".to_string()];
    write_context_file(&blocks, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "a: x\nb: y\n\nc: z\n\n");
}

#[test]
fn test_five_line_listing_window_of_one() {
    let lines = [
        "401000: push rbp\n",
        "401001: mov rbp, rsp\n",
        "401004: mov eax, 0\n",
        "401009: pop rbp\n",
        "40100a: ret\n",
    ];
    let targets: BTreeSet<String> = ["401004:".to_string()].into_iter().collect();

    let blocks = extract_context(&targets, &lines, ContextWindow::new(1, 1));

    assert_eq!(
        blocks,
        vec!["401001: mov rbp, rsp\n401004: mov eax, 0\n401009: pop rbp\n".to_string()]
    );
}

#[test]
fn test_validate_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
    assert!(validate_path(Path::new("")).is_err());
}
