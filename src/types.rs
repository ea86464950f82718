//! Types shared between discovery, rendering and CLI output.

use serde::Serialize;

/// One discovered build: its display name and the directory hosting it.
///
/// The display name is only used for ordering and as link text. The
/// directory name becomes the first segment of the link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildEntry {
    /// First line of the marker file, whitespace-trimmed. May be empty.
    pub name: String,
    /// Directory name relative to the scanned root.
    pub dir: String,
}

impl BuildEntry {
    pub fn new(name: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// Link target relative to the generated page, e.g. `beta/index.html`.
    pub fn href(&self, entry_point: &str) -> String {
        format!("{}/{}", self.dir, entry_point)
    }
}
