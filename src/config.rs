//! Configuration module.
//!
//! Handles loading, validating, and layering `docnav.toml`. Values are
//! resolved in three layers, each overriding the one before:
//!
//! ```text
//! stock defaults  →  docnav.toml  →  command-line flags (--source, --ignore)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [sidebar]
//! source_dir = "docs"                      # Required. Directory to scan.
//! ignore = ["node_modules", ".vitepress"]  # Directory names to skip
//! extension = "md"                         # Document extension (no dot)
//! field = "title"                          # Front-matter field with the label
//!
//! [site]
//! # Host configuration, passed through untouched except for
//! # themeConfig.sidebar, themeConfig.outline and vite.server.fs.allow.
//! title = "My Docs"
//! ```
//!
//! Unknown keys under `[sidebar]` or at the top level are rejected to catch
//! typos early. `[site]` is free-form.
//!
//! `source_dir` has no default. Its absence is reported when the sidebar is
//! generated, not when the file is loaded, so `gen-config` and partial files
//! stay valid.

use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Missing required setting `{0}`")]
    MissingSetting(&'static str),
}

/// Top-level `docnav.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sidebar generation settings.
    pub sidebar: SidebarConfig,
    /// Host configuration the sidebar is merged into.
    pub site: toml::Table,
}

/// Sidebar generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Directory scanned for documents. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    /// Directory names never descended into. Absent means none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    /// Document extension, without the leading dot.
    pub extension: String,
    /// Front-matter field holding the navigation label.
    pub field: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        let scan = ScanOptions::default();
        Self {
            source_dir: None,
            ignore: None,
            extension: scan.extension,
            field: scan.field,
        }
    }
}

impl SidebarConfig {
    /// The source directory, or the user-facing error naming the setting.
    pub fn require_source_dir(&self) -> Result<&Path, ConfigError> {
        self.source_dir
            .as_deref()
            .ok_or(ConfigError::MissingSetting("sidebar.source_dir"))
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            ignore: self.ignore.clone().unwrap_or_default(),
            extension: self.extension.clone(),
            field: self.field.clone(),
        }
    }
}

impl Config {
    /// Validate values that would otherwise fail silently during a scan.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sidebar = &self.sidebar;
        if sidebar.extension.is_empty() {
            return Err(ConfigError::Validation(
                "sidebar.extension must not be empty".into(),
            ));
        }
        if sidebar.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "sidebar.extension must not start with a dot".into(),
            ));
        }
        if sidebar.field.trim().is_empty() || sidebar.field.contains(':') {
            return Err(ConfigError::Validation(
                "sidebar.field must be a non-empty key without ':'".into(),
            ));
        }
        for name in sidebar.ignore.iter().flatten() {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "sidebar.ignore entries must be bare directory names, got {name:?}"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   overlay `ignore` list replaces the base list.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Build the command-line layer from `--source` and `--ignore`.
///
/// Returns `None` when neither flag was given.
pub fn overrides_value(source_dir: Option<&Path>, ignore: &[String]) -> Option<toml::Value> {
    let mut sidebar = toml::Table::new();
    if let Some(dir) = source_dir {
        sidebar.insert(
            "source_dir".into(),
            toml::Value::String(dir.to_string_lossy().into_owned()),
        );
    }
    if !ignore.is_empty() {
        sidebar.insert(
            "ignore".into(),
            toml::Value::Array(ignore.iter().cloned().map(toml::Value::String).collect()),
        );
    }
    if sidebar.is_empty() {
        return None;
    }
    let mut root = toml::Table::new();
    root.insert("sidebar".into(), toml::Value::Table(sidebar));
    Some(toml::Value::Table(root))
}

/// Merge overlays in order onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `path` over stock defaults. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_layered(path, None)
}

/// Load `path` over stock defaults, then apply command-line overrides.
pub fn load_layered(path: &Path, cli: Option<toml::Value>) -> Result<Config, ConfigError> {
    let file = load_raw_config(path)?;
    if file.is_none() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
    }
    resolve_config(stock_defaults_value(), file.into_iter().chain(cli))
}

/// Returns a fully-commented stock `docnav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Configuration
# ====================
# Values shown below are the defaults. `source_dir` is required and has no
# default: set it here or pass --source on the command line.

# ---------------------------------------------------------------------------
# Sidebar generation
# ---------------------------------------------------------------------------
[sidebar]
# Directory scanned for documents.
# source_dir = "docs"

# Directory names never descended into, at any depth. Exact, case-sensitive
# match on the bare name.
# ignore = ["node_modules", ".vitepress"]

# Document extension, without the dot. Matched case-insensitively.
extension = "md"

# Front-matter field holding the navigation label. A label like
# "Guide/Getting Started" puts the page under a "Guide" group.
field = "title"

# ---------------------------------------------------------------------------
# Host site configuration
# ---------------------------------------------------------------------------
# Everything here is copied to the output. docnav sets
# themeConfig.sidebar, themeConfig.outline = "deep", and appends source_dir
# to vite.server.fs.allow.
[site]
# title = "My Docs"
"##
}
