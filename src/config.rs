//! Index configuration.
//!
//! Every setting has a default that reproduces the stock UnSHACLed landing
//! page, so the tool needs no configuration at all. To customize the page,
//! place a `build-index.toml` in the scanned root or pass `--config <file>`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "UnSHACLed builds"      # <title> of the page
//! heading = "UnSHACLed builds"    # <h1> of the page
//! intro = "What follows is ..."   # Sentence above the list
//! stylesheet = "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css"
//!
//! marker_file = "build-name"      # First line names the build
//! entry_point = "index.html"      # Must exist for a directory to count
//! indent = 12                     # Spaces before each <li> in the output
//! ```
//!
//! Config files are sparse: override only the keys you need. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file picked up from the scanned root.
pub const CONFIG_FILE_NAME: &str = "build-index.toml";

const MAX_INDENT: usize = 64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page text and file-name conventions for the generated index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Document `<title>`.
    pub title: String,
    /// Page `<h1>`.
    pub heading: String,
    /// Explanatory sentence shown above the list.
    pub intro: String,
    /// Stylesheet URL linked from the document head.
    pub stylesheet: String,
    /// File whose first line supplies a build's display name.
    pub marker_file: String,
    /// File that must exist for a directory to count as a build.
    pub entry_point: String,
    /// Number of spaces before each list item in the generated source.
    pub indent: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "UnSHACLed builds".to_string(),
            heading: "UnSHACLed builds".to_string(),
            intro: "What follows is a list of all UnSHACLed builds hosted here. \
                    Click a hyperlink to try out a particular build."
                .to_string(),
            stylesheet: "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css"
                .to_string(),
            marker_file: "build-name".to_string(),
            entry_point: "index.html".to_string(),
            indent: 12,
        }
    }
}

impl IndexConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_file_name("marker_file", &self.marker_file)?;
        validate_file_name("entry_point", &self.entry_point)?;
        if self.indent > MAX_INDENT {
            return Err(ConfigError::Validation(format!(
                "indent must be at most {MAX_INDENT}"
            )));
        }
        Ok(())
    }
}

/// Marker and entry point are looked up directly inside each candidate, so
/// they must be plain file names.
fn validate_file_name(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if value == "." || value == ".." || value.contains('/') || value.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "{key} must be a plain file name, got {value:?}"
        )));
    }
    Ok(())
}

/// Parse and validate config from TOML text.
pub fn parse_config(content: &str) -> Result<IndexConfig, ConfigError> {
    let config: IndexConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Without one, `build-index.toml` in `root` is
/// used when present, and stock defaults otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<IndexConfig, ConfigError> {
    let path = match explicit {
        Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(IndexConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# build-index configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# build-index reads build-index.toml from the scanned directory, or the
# file passed with --config. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page text
# ---------------------------------------------------------------------------
# Document <title>.
title = "UnSHACLed builds"

# Page heading (<h1>).
heading = "UnSHACLed builds"

# Sentence shown above the list of builds.
intro = "What follows is a list of all UnSHACLed builds hosted here. Click a hyperlink to try out a particular build."

# Stylesheet linked from the document head.
stylesheet = "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css"

# ---------------------------------------------------------------------------
# Discovery
# ---------------------------------------------------------------------------
# File inside each build directory whose first line names the build.
marker_file = "build-name"

# File that must exist inside a directory for it to be listed.
# Links point at <directory>/<entry_point>.
entry_point = "index.html"

# ---------------------------------------------------------------------------
# Output layout
# ---------------------------------------------------------------------------
# Spaces before each <li> in the generated HTML source (0-64).
indent = 12
"##
}
