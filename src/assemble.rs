//! Host configuration assembly.
//!
//! Ties the pipeline together: check settings, scan the source directory,
//! build the tree, and merge the result into the caller's site config.
//!
//! The merge touches exactly three places and copies everything else:
//!
//! ```text
//! themeConfig.sidebar     ← generated tree (replaces any existing value)
//! themeConfig.outline     ← "deep"
//! vite.server.fs.allow    ← existing entries + source_dir
//! ```
//!
//! Each level is shallow-merged: sibling keys of `themeConfig`, `vite`,
//! `vite.server` and `vite.server.fs` survive untouched.

use crate::config::{Config, ConfigError, SidebarConfig};
use crate::scan::{DocumentSource, FsSource, ScanError};
use crate::tree;
use crate::types::NavNode;
use std::path::Path;
use thiserror::Error;
use toml::{Table, Value};

pub const THEME_KEY: &str = "themeConfig";
pub const SIDEBAR_KEY: &str = "sidebar";
pub const OUTLINE_KEY: &str = "outline";
pub const OUTLINE_DEEP: &str = "deep";
/// Path from the site root to the table holding the file-serving allow list.
pub const ALLOW_PARENT: [&str; 3] = ["vite", "server", "fs"];
pub const ALLOW_KEY: &str = "allow";

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Sidebar serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Scan the configured source directory and build its sidebar tree.
///
/// A missing `source_dir` fails before `source` is consulted.
pub fn generate_sidebar<S: DocumentSource + ?Sized>(
    source: &S,
    sidebar: &SidebarConfig,
) -> Result<Vec<NavNode>, AssembleError> {
    let root = sidebar.require_source_dir()?;
    sidebar_at(source, root, sidebar)
}

fn sidebar_at<S: DocumentSource + ?Sized>(
    source: &S,
    root: &Path,
    sidebar: &SidebarConfig,
) -> Result<Vec<NavNode>, AssembleError> {
    let records = source.documents(root, &sidebar.scan_options())?;
    Ok(tree::build(&records))
}

/// Produce the augmented site config from the local filesystem.
pub fn assemble(config: &Config) -> Result<Table, AssembleError> {
    assemble_with(&FsSource, config)
}

/// Produce the augmented site config using `source` for documents.
pub fn assemble_with<S: DocumentSource + ?Sized>(
    source: &S,
    config: &Config,
) -> Result<Table, AssembleError> {
    let root = config.sidebar.require_source_dir()?;
    let nodes = sidebar_at(source, root, &config.sidebar)?;
    tracing::info!(
        source_dir = %root.display(),
        top_level = nodes.len(),
        "sidebar generated"
    );
    merge_sidebar(config.site.clone(), &nodes, root)
}

/// Merge a generated tree and the source directory into a site table.
pub fn merge_sidebar(
    mut site: Table,
    nodes: &[NavNode],
    source_dir: &Path,
) -> Result<Table, AssembleError> {
    let sidebar = Value::try_from(nodes)?;

    let theme = child_table(&mut site, THEME_KEY);
    theme.insert(SIDEBAR_KEY.to_string(), sidebar);
    theme.insert(
        OUTLINE_KEY.to_string(),
        Value::String(OUTLINE_DEEP.to_string()),
    );

    let fs = ALLOW_PARENT
        .iter()
        .fold(&mut site, |table, key| child_table(table, key));
    allow_path(fs, &source_dir.to_string_lossy());

    Ok(site)
}

/// Get `table[key]` as a table, inserting an empty one if it is missing or
/// not a table.
fn child_table<'a>(table: &'a mut Table, key: &str) -> &'a mut Table {
    let entry = table
        .entry(key.to_string())
        .or_insert(Value::Table(Table::new()));
    if !entry.is_table() {
        tracing::warn!(key, "replacing non-table value in site config");
        *entry = Value::Table(Table::new());
    }
    entry
        .as_table_mut()
        .expect("entry was just ensured to be a table")
}

/// Append `dir` to the allow list unless it is already listed.
fn allow_path(fs: &mut Table, dir: &str) {
    let entry = fs
        .entry(ALLOW_KEY.to_string())
        .or_insert(Value::Array(Vec::new()));
    if !entry.is_array() {
        // A single string is promoted to a one-element list.
        let existing = std::mem::replace(entry, Value::Array(Vec::new()));
        if existing.is_str() {
            entry
                .as_array_mut()
                .expect("entry was just replaced with an array")
                .push(existing);
        }
    }
    let allow = entry
        .as_array_mut()
        .expect("entry was ensured to be an array");
    if !allow.iter().any(|v| v.as_str() == Some(dir)) {
        allow.push(Value::String(dir.to_string()));
    }
}
