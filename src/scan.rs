//! Document discovery.
//!
//! Stage 1 of the pipeline. Walks the source directory depth-first and turns
//! every Markdown file that carries a front-matter title into a
//! [`DocumentRecord`]:
//!
//! ```text
//! docs/                          # Source root
//! ├── index.md                   # title: Home             → /index
//! ├── guide/
//! │   ├── intro.md               # title: Guide/Intro      → /guide/intro
//! │   └── scratch.md             # (no front matter)       → skipped
//! ├── api/
//! │   └── Client.MD              # title: API/Client       → /api/Client
//! └── node_modules/              # ignored by name         → not descended
//! ```
//!
//! ## Ordering
//!
//! Records come out in traversal order: pre-order, with each directory's
//! entries in whatever order the filesystem reports them. Nothing is sorted,
//! so sibling order in the final sidebar follows the filesystem.
//!
//! ## Failures
//!
//! Only the root is load-bearing: if it is missing, not a directory, or
//! unreadable, the scan fails with the underlying I/O error. Anything that
//! goes wrong below the root (an unreadable subdirectory, a binary file, a
//! document without a title) drops just that entry.

use crate::frontmatter::FieldExtractor;
use crate::types::DocumentRecord;
use std::fs;
use std::io;
use std::path::{Component, Path};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What to look for while walking the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory names never descended into, matched against the bare name
    /// at any depth.
    pub ignore: Vec<String>,
    /// Document extension without the dot, matched case-insensitively.
    pub extension: String,
    /// Front-matter field holding the navigation label.
    pub field: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            extension: "md".to_string(),
            field: "title".to_string(),
        }
    }
}

/// Where the orchestrator gets its documents from.
pub trait DocumentSource {
    fn documents(
        &self,
        root: &Path,
        options: &ScanOptions,
    ) -> Result<Vec<DocumentRecord>, ScanError>;
}

/// Reads documents from the local filesystem via [`scan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn documents(
        &self,
        root: &Path,
        options: &ScanOptions,
    ) -> Result<Vec<DocumentRecord>, ScanError> {
        scan(root, options)
    }
}

pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<DocumentRecord>, ScanError> {
    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", root.display()),
        )
        .into());
    }
    // Surface permission errors on the root itself before walking.
    fs::read_dir(root)?;

    let extractor = FieldExtractor::new(&options.field);
    let suffix = format!(".{}", options.extension);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry, &options.ignore));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(io::Error::from(err).into()),
            Err(err) => {
                tracing::debug!(error = %err, "skipping inaccessible entry");
                continue;
            }
        };

        if entry.file_type().is_dir() || !has_extension(entry.file_name(), &suffix) {
            continue;
        }

        let Some(label) = extractor.read(entry.path()) else {
            tracing::debug!(
                path = %entry.path().display(),
                field = extractor.field(),
                "no label, skipping"
            );
            skipped += 1;
            continue;
        };

        let Some(path) = document_link(entry.path(), root, suffix.len()) else {
            skipped += 1;
            continue;
        };
        records.push(DocumentRecord { path, label });
    }

    tracing::info!(
        root = %root.display(),
        documents = records.len(),
        skipped,
        "scan complete"
    );
    Ok(records)
}

fn is_ignored(entry: &DirEntry, ignore: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore.iter().any(|ignored| ignored == name))
}

/// Case-insensitive suffix check on a file name, e.g. `Intro.MD` against `.md`.
fn has_extension(name: &std::ffi::OsStr, suffix: &str) -> bool {
    let name = name.to_string_lossy();
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Build the root-relative link for a document: `guide/intro.md` → `/guide/intro`.
fn document_link(path: &Path, root: &Path, suffix_len: usize) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let mut link = format!("/{}", parts.join("/"));
    link.truncate(link.len().checked_sub(suffix_len)?);
    Some(link)
}
