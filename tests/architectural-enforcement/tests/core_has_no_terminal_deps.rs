//! Integration Test: Headless Core
//!
//! **Policy**: `sl-core` knows nothing about terminals. It draws through the
//! `Surface` and `Screen` traits; ratatui and crossterm live in `tui/` only.

use architectural_enforcement::{production_lines, read_source, rust_sources, workspace_root};

const TERMINAL_CRATES: [&str; 2] = ["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = read_source(&workspace_root().join("core/Cargo.toml"));
    assert!(!manifest.is_empty(), "core/Cargo.toml not found");

    for name in TERMINAL_CRATES {
        let listed = manifest
            .lines()
            .any(|line| line.trim_start().starts_with(name));
        assert!(!listed, "core/Cargo.toml depends on {name}");
    }
}

#[test]
fn test_core_sources_do_not_import_terminal_crates() {
    let mut violations = Vec::new();

    for path in rust_sources("core/src") {
        let content = read_source(&path);
        for line in production_lines(&content) {
            for name in TERMINAL_CRATES {
                if line.code.contains(&format!("{name}::")) {
                    violations.push(format!(
                        "{}:{} - {}",
                        path.display(),
                        line.number,
                        line.code.trim()
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "terminal crates used in core:\n{}",
        violations.join("\n")
    );
}
