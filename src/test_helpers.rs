//! Shared test utilities for building hosting-directory fixtures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! add_build(tmp.path(), "alpha", "Zeta Build");
//! add_marker_only(tmp.path(), "half-done", "Never Finished");
//!
//! let entries = discover(tmp.path(), &IndexConfig::default()).unwrap();
//! assert_eq!(names(&entries), vec!["Zeta Build"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::BuildEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `root/dir` with a `build-name` marker and an `index.html`.
pub fn add_build(root: &Path, dir: &str, marker: &str) -> PathBuf {
    let path = add_marker_only(root, dir, marker);
    fs::write(path.join("index.html"), "<!DOCTYPE html>\n").unwrap();
    path
}

/// Create `root/dir` with a `build-name` marker but no entry point.
pub fn add_marker_only(root: &Path, dir: &str, marker: &str) -> PathBuf {
    let path = root.join(dir);
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("build-name"), marker).unwrap();
    path
}

/// Create `root/dir` with an entry point but no marker.
pub fn add_entry_point_only(root: &Path, dir: &str) -> PathBuf {
    let path = root.join(dir);
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("index.html"), "<!DOCTYPE html>\n").unwrap();
    path
}

/// Lay out the alpha/beta/gamma hosting directory used across the suite.
///
/// - `alpha`: "Zeta Build", complete
/// - `beta`: "Alpha Build", complete
/// - `gamma`: entry point only, no marker
pub fn setup_three_dirs(root: &Path) {
    add_build(root, "alpha", "Zeta Build\n");
    add_build(root, "beta", "Alpha Build\n");
    add_entry_point_only(root, "gamma");
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All display names in entry order.
pub fn names(entries: &[BuildEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// All directory names in entry order.
pub fn dirs(entries: &[BuildEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.dir.as_str()).collect()
}
