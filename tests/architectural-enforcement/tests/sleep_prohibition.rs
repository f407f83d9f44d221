//! Integration Test: Sleep Prohibition
//!
//! **Policy**: The frame pacer is the only place the program may suspend.
//! Every other production path either draws, polls without blocking, or
//! returns.
//! **Exceptions**: `core/src/pacer.rs`, test code

use std::path::Path;

use architectural_enforcement::{production_lines, read_source, rust_sources};

/// File allowed to sleep, relative to the workspace root
const PACER: &str = "core/src/pacer.rs";

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_sleep_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }
        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - FramePacer::pace in {PACER}");
        eprintln!("  - Test code (#[cfg(test)] modules)");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

/// The pacer still owns the one sleep
#[test]
fn test_pacer_is_the_sleeper() {
    let path = architectural_enforcement::workspace_root().join(PACER);
    let content = read_source(&path);

    let sleeps = production_lines(&content)
        .iter()
        .filter(|line| is_sleep_call(line.code))
        .count();
    assert_eq!(sleeps, 1, "expected exactly one sleep in {PACER}");
}

fn find_sleep_violations() -> Vec<String> {
    let mut violations = Vec::new();

    for dir in ["core/src", "tui/src"] {
        for path in rust_sources(dir) {
            if path.ends_with(PACER) {
                continue;
            }
            check_file(&path, &mut violations);
        }
    }

    violations
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = read_source(path);

    for line in production_lines(&content) {
        if is_sleep_call(line.code) {
            violations.push(format!(
                "{}:{} - {}",
                path.display(),
                line.number,
                line.code.trim()
            ));
        }
    }
}

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(")
}
