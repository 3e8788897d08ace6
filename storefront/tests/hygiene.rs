//! Hygiene — enforces coding standards at test time
//!
//! Scans the storefront crate's production sources for antipatterns. Every
//! budget is zero and stays zero: the reducer is documented as total and
//! the persistence layer as non-fatal, so a panic or silently dropped error
//! in `src/` is a bug by definition, not a style preference.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding sibling `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; is the test running from the crate root?");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
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

/// Assert that `pattern` never appears in production code.
fn assert_absent(pattern: &str) {
    let mut hits = Vec::new();
    for file in source_files() {
        for (index, line) in file.content.lines().enumerate() {
            if line.contains(pattern) {
                hits.push(format!("  {}:{}: {}", file.path, index + 1, line.trim()));
            }
        }
    }
    assert!(hits.is_empty(), "`{pattern}` found in production code:\n{}", hits.join("\n"));
}

#[test]
fn no_panicking_helpers() {
    assert_absent(".unwrap()");
    assert_absent(".expect(");
    assert_absent("panic!(");
    assert_absent("unreachable!(");
}

#[test]
fn no_stubs() {
    assert_absent("todo!(");
    assert_absent("unimplemented!(");
}

#[test]
fn no_silent_error_discards() {
    assert_absent("let _ =");
    assert_absent(".ok()");
}

#[test]
fn no_dead_code_waivers() {
    assert_absent("#[allow(dead_code)]");
}
