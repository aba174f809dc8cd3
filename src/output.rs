//! CLI output formatting.
//!
//! Output is information-first: every entry leads with its positional index
//! and display name, with the link or source shown as secondary context.
//!
//! ## Scan
//!
//! ```text
//! Documents
//! 001 Guide/Intro
//!     Source: /guide/intro
//! 002 Home
//!     Source: /index
//! ```
//!
//! ## Tree
//!
//! ```text
//! Sidebar
//! 001 Guide
//!     001 Intro → /guide/intro
//!     002 Setup → /guide/setup
//! 002 Home → /index
//! ```
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::types::{DocumentRecord, NavNode, count_leaves};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Scan output
// ============================================================================

pub fn format_records(records: &[DocumentRecord]) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];
    if records.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, record) in records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), record.label));
        lines.push(format!("    Source: {}", record.path));
    }
    lines
}

pub fn print_records(records: &[DocumentRecord]) {
    for line in format_records(records) {
        println!("{}", line);
    }
}

// ============================================================================
// Tree output
// ============================================================================

pub fn format_tree(nodes: &[NavNode]) -> Vec<String> {
    let mut lines = vec!["Sidebar".to_string()];
    if nodes.is_empty() {
        lines.push("    (empty)".to_string());
    }
    push_nodes(nodes, 0, &mut lines);
    lines
}

fn push_nodes(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let header = format!("{}{} {}", indent(depth), format_index(i + 1), node.text());
        match node {
            NavNode::Leaf { link, .. } => lines.push(format!("{} → {}", header, link)),
            NavNode::Group { items, .. } => {
                lines.push(header);
                push_nodes(items, depth + 1, lines);
            }
        }
    }
}

pub fn print_tree(nodes: &[NavNode]) {
    for line in format_tree(nodes) {
        println!("{}", line);
    }
}

// ============================================================================
// Summary
// ============================================================================

fn count_groups(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            NavNode::Group { items, .. } => 1 + count_groups(items),
            NavNode::Leaf { .. } => 0,
        })
        .sum()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One-line summary, e.g. `Sidebar: 3 pages in 2 groups`.
pub fn format_summary(nodes: &[NavNode]) -> String {
    format!(
        "Sidebar: {} in {}",
        plural(count_leaves(nodes), "page"),
        plural(count_groups(nodes), "group")
    )
}
