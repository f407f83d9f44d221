//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() calls in production code outside the frame pacer
//! - The animation engine stays free of terminal crates
//!
//! The helpers below walk the workspace sources for those tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the cargo workspace
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Every `.rs` file under `dir`, relative to the workspace root
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// A source line outside test code, with any trailing comment removed
pub struct ProductionLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Code before any `//`
    pub code: &'a str,
}

/// Lines of `content` up to the first `#[cfg(test)]`
pub fn production_lines(content: &str) -> Vec<ProductionLine<'_>> {
    content
        .lines()
        .take_while(|line| line.trim() != "#[cfg(test)]")
        .enumerate()
        .map(|(idx, line)| ProductionLine {
            number: idx + 1,
            code: line.split("//").next().unwrap_or(line),
        })
        .collect()
}

/// Read a file, treating unreadable files as empty
pub fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let content = "fn a() {}\n// note\nlet x = 1; // trailing\n#[cfg(test)]\nfn b() {}\n";
        let lines = production_lines(content);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].code, "");
        assert_eq!(lines[2].code, "let x = 1; ");
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_workspace_root_has_members() {
        assert!(workspace_root().join("core/Cargo.toml").exists());
        assert!(!rust_sources("core/src").is_empty());
    }
}
