//! Hygiene: source-level budgets for the navcanvas library.
//!
//! Scans `src/` (test files excluded) for patterns that crash the process,
//! swallow errors, or bypass `tracing`. Every budget is zero. A budget may only
//! go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// ── Panics ──────────────────────────────────────────────────────
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// ── Silent loss ─────────────────────────────────────────────────
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// ── Structure ───────────────────────────────────────────────────
const MAX_ALLOW_DEAD_CODE: usize = 0;
/// Library code reports through `tracing`; only the binary prints.
const MAX_PRINT_IN_LIB: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file counts of lines containing `pattern`, skipping `//` comment lines.
fn hits(files: &[&SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//") && line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(files: &[&SourceFile], pattern: &str, max: usize) {
    let found = hits(files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

fn all() -> Vec<SourceFile> {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn refs(files: &[SourceFile]) -> Vec<&SourceFile> {
    files.iter().collect()
}

#[test]
fn unwrap_budget() {
    check(&refs(&all()), ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check(&refs(&all()), ".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check(&refs(&all()), "panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check(&refs(&all()), "unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&refs(&all()), "todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check(&refs(&all()), "unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&refs(&all()), "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&refs(&all()), ".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&refs(&all()), "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn print_budget_outside_binary() {
    let files = all();
    let lib: Vec<&SourceFile> = files.iter().filter(|f| !f.path.ends_with("main.rs")).collect();
    check(&lib, "println!(", MAX_PRINT_IN_LIB);
    check(&lib, "eprintln!(", MAX_PRINT_IN_LIB);
    check(&lib, "dbg!(", MAX_PRINT_IN_LIB);
}
