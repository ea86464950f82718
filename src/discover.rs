//! Build discovery.
//!
//! Stage 1 of the index pipeline. Looks one level below the root for
//! directories that host a static build, producing the sorted entries the
//! renderer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! builds/                      # Scanned root (usually the working directory)
//! ├── build-index.toml         # Optional config
//! ├── master/
//! │   ├── build-name           # "Latest master build"
//! │   └── index.html
//! ├── pr-42/
//! │   ├── build-name           # "PR #42: SHACL editor"
//! │   └── index.html
//! ├── half-done/
//! │   └── build-name           # No entry point: skipped
//! └── assets/                  # No marker: skipped
//! ```
//!
//! ## Rules
//!
//! - The marker must open as a readable file. Anything else skips the
//!   candidate silently.
//! - The entry point only has to exist. Its contents are never read.
//! - The display name is the first line of the marker, whitespace-trimmed.
//!   An empty marker yields an empty name, which sorts first.
//! - Entries are sorted by display name in byte order, then by directory
//!   name so ties come out the same on every run.
//!
//! Failing to list the root itself is the only error that surfaces.

use crate::config::IndexConfig;
use crate::types::BuildEntry;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Cannot read directory {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Discover every build directly below `root`, sorted by display name.
pub fn discover(root: &Path, config: &IndexConfig) -> Result<Vec<BuildEntry>, DiscoverError> {
    let read_root = |source: io::Error| DiscoverError::ReadRoot {
        path: root.to_path_buf(),
        source,
    };

    let meta = fs::metadata(root).map_err(read_root)?;
    if !meta.is_dir() {
        return Err(DiscoverError::NotADirectory(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(err) if err.depth() == 0 => return Err(read_root(err.into())),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let dir = item.file_name().to_string_lossy().to_string();
        if let Some(entry) = inspect_candidate(item.path(), &dir, config) {
            tracing::debug!(dir = %entry.dir, name = %entry.name, "found build");
            entries.push(entry);
        }
    }

    sort_entries(&mut entries);
    tracing::info!(root = %root.display(), builds = entries.len(), "discovery finished");
    Ok(entries)
}

/// Order by display name, falling back to directory name on ties.
pub fn sort_entries(entries: &mut [BuildEntry]) {
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.dir.cmp(&b.dir)));
}

/// Check one child of the root. Returns `None` when it is not a build.
fn inspect_candidate(path: &Path, dir: &str, config: &IndexConfig) -> Option<BuildEntry> {
    let marker_path = path.join(&config.marker_file);
    let marker = match open_marker(&marker_path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!(dir, error = %err, "no readable marker, skipping");
            return None;
        }
    };

    if !path.join(&config.entry_point).exists() {
        tracing::debug!(dir, entry_point = %config.entry_point, "no entry point, skipping");
        return None;
    }

    match read_display_name(BufReader::new(marker)) {
        Ok(name) => Some(BuildEntry::new(name, dir)),
        Err(err) => {
            tracing::debug!(dir, error = %err, "marker unreadable, skipping");
            None
        }
    }
}

/// Open a marker for reading. Directories open fine on some platforms, so
/// they are rejected explicitly.
fn open_marker(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(file)
}

/// Read the first line of a marker and trim surrounding whitespace.
///
/// `\n`, `\r\n` and a lone `\r` all end the line. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_display_name<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    let first = line.split(['\r', '\n']).next().unwrap_or_default();
    Ok(first.trim().to_string())
}
