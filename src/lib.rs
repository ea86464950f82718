//! # build-index
//!
//! Generates a landing page for a directory of hosted static builds. Each
//! build lives in its own top-level directory with a `build-name` marker
//! (first line = display name) and an `index.html` entry point. The page
//! links every build, sorted by name.
//!
//! # Pipeline
//!
//! ```text
//! 1. Discover  root/        →  Vec<BuildEntry>   (sorted by display name)
//! 2. Render    entries      →  String            (complete HTML document)
//! ```
//!
//! Discovery never fails on a single bad candidate: anything without a
//! readable marker or an entry point is skipped. Only an unreadable root is
//! an error. Rendering is a pure function and cannot fail.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Stage 1 — lists the root, filters build directories, reads display names |
//! | [`render`] | Stage 2 — fills the embedded page template with one `<li>` per build |
//! | [`config`] | Optional `build-index.toml`: page text and file-name conventions |
//! | [`types`] | [`types::BuildEntry`], shared between stages |
//! | [`output`] | CLI output for the `list` command |
//!
//! # Example
//!
//! ```no_run
//! use build_index::{config::IndexConfig, discover::discover, render::render_index};
//! use std::path::Path;
//!
//! let config = IndexConfig::default();
//! let entries = discover(Path::new("."), &config)?;
//! println!("{}", render_index(&entries, &config));
//! # Ok::<(), build_index::discover::DiscoverError>(())
//! ```

pub mod config;
pub mod discover;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
