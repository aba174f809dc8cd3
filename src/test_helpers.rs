//! Shared test utilities for the docnav test suite.
//!
//! Provides fixture setup, document writers, and sidebar shape assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_titled(tmp.path(), "guide/intro.md", "Guide/Intro");
//!
//! let tree = build(&scan(tmp.path(), &ScanOptions::default()).unwrap());
//! assert_tree_shape(&tree, &[
//!     "Guide",
//!     "  Intro -> /guide/intro",
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{DocumentRecord, NavNode};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a document at `rel` under `root`, creating parent directories.
pub fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Write a document whose front matter carries only `title`.
pub fn write_titled(root: &Path, rel: &str, title: &str) {
    write_doc(root, rel, &format!("---\ntitle: {title}\n---\n\n# {title}\n"));
}

// =========================================================================
// Record and node constructors
// =========================================================================

pub fn records(pairs: &[(&str, &str)]) -> Vec<DocumentRecord> {
    pairs
        .iter()
        .map(|(path, label)| DocumentRecord::new(*path, *label))
        .collect()
}

pub fn record_paths(records: &[DocumentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.path.as_str()).collect()
}

pub fn leaf(text: &str, link: &str) -> NavNode {
    NavNode::Leaf {
        text: text.to_string(),
        link: link.to_string(),
    }
}

// =========================================================================
// Tree shape assertions
// =========================================================================

/// Render a tree as indented lines: two spaces per level, leaves as
/// `text -> link`, groups as bare `text`.
pub fn tree_lines(nodes: &[NavNode]) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(nodes, 0, &mut lines);
    lines
}

fn push_lines(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        let pad = "  ".repeat(depth);
        match node {
            NavNode::Leaf { text, link } => lines.push(format!("{pad}{text} -> {link}")),
            NavNode::Group { text, items, .. } => {
                lines.push(format!("{pad}{text}"));
                push_lines(items, depth + 1, lines);
            }
        }
    }
}

/// Assert that a tree matches an expected indented rendering.
///
/// ```rust
/// assert_tree_shape(&tree, &["Guide", "  Intro -> /guide/intro"]);
/// ```
pub fn assert_tree_shape(nodes: &[NavNode], expected: &[&str]) {
    let actual = tree_lines(nodes);
    assert_eq!(actual, expected, "sidebar shape mismatch");
}

/// Find a top-level node by text. Panics if not found.
pub fn find_node<'a>(nodes: &'a [NavNode], text: &str) -> &'a NavNode {
    nodes.iter().find(|n| n.text() == text).unwrap_or_else(|| {
        let texts: Vec<&str> = nodes.iter().map(NavNode::text).collect();
        panic!("node '{text}' not found. Available: {texts:?}")
    })
}
