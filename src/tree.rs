//! Sidebar tree construction.
//!
//! Stage 2 of the pipeline. Each record's label is a `/`-separated path; all
//! segments but the last name groups, the last names the link:
//!
//! ```text
//! /guide/intro     title: Guide/Intro          Guide
//! /guide/setup     title: Guide/Setup     →    ├── Intro    → /guide/intro
//! /api/client      title: API/Http/Client      └── Setup    → /guide/setup
//!                                              API
//!                                              └── Http
//!                                                  └── Client → /api/client
//! ```
//!
//! Groups are found by exact name among sibling *groups* and created on
//! first use. Leaves are always appended, so two documents with the same
//! label become two sibling leaves, and a leaf never stands in for a group of
//! the same name. Sibling order is first-seen order of the input.
//!
//! The tree is grown in an arena of nodes indexed by position and converted
//! to owned [`NavNode`]s once every record has been inserted.

use crate::types::{DocumentRecord, NavNode};

const ROOT: usize = 0;

#[derive(Debug)]
enum Slot {
    Group { text: String, children: Vec<usize> },
    Leaf { text: String, link: String },
}

/// Incremental sidebar builder.
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Slot>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Slot::Group {
                text: String::new(),
                children: Vec::new(),
            }],
        }
    }

    /// Fold one record into the tree.
    ///
    /// Returns `false` when the label has no non-empty segments and the
    /// record was dropped.
    pub fn insert(&mut self, record: &DocumentRecord) -> bool {
        let segments = label_segments(&record.label);
        let Some((leaf, groups)) = segments.split_last() else {
            return false;
        };

        let mut current = ROOT;
        for name in groups {
            current = match self.find_group(current, name) {
                Some(index) => index,
                None => self.push_child(
                    current,
                    Slot::Group {
                        text: (*name).to_string(),
                        children: Vec::new(),
                    },
                ),
            };
        }
        self.push_child(
            current,
            Slot::Leaf {
                text: (*leaf).to_string(),
                link: record.path.clone(),
            },
        );
        true
    }

    /// Consume the builder and return the root's children.
    pub fn finish(mut self) -> Vec<NavNode> {
        let roots = self.children(ROOT).to_vec();
        roots.into_iter().map(|index| self.take(index)).collect()
    }

    fn children(&self, index: usize) -> &[usize] {
        match &self.nodes[index] {
            Slot::Group { children, .. } => children,
            Slot::Leaf { .. } => &[],
        }
    }

    fn find_group(&self, parent: usize, name: &str) -> Option<usize> {
        self.children(parent).iter().copied().find(
            |&child| matches!(&self.nodes[child], Slot::Group { text, .. } if text == name),
        )
    }

    fn push_child(&mut self, parent: usize, slot: Slot) -> usize {
        let index = self.nodes.len();
        self.nodes.push(slot);
        if let Slot::Group { children, .. } = &mut self.nodes[parent] {
            children.push(index);
        }
        index
    }

    /// Move a node (and its subtree) out of the arena.
    ///
    /// Every index has exactly one parent, so each slot is taken once.
    fn take(&mut self, index: usize) -> NavNode {
        let placeholder = Slot::Leaf {
            text: String::new(),
            link: String::new(),
        };
        match std::mem::replace(&mut self.nodes[index], placeholder) {
            Slot::Leaf { text, link } => NavNode::Leaf { text, link },
            Slot::Group { text, children } => NavNode::Group {
                text,
                collapsed: true,
                items: children.into_iter().map(|child| self.take(child)).collect(),
            },
        }
    }
}

/// Split a label on `/`, trimming segments and dropping empty ones.
pub fn label_segments(label: &str) -> Vec<&str> {
    label
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Build the sidebar tree from records in scan order.
pub fn build(records: &[DocumentRecord]) -> Vec<NavNode> {
    let mut builder = TreeBuilder::new();
    let mut dropped = 0usize;
    for record in records {
        if !builder.insert(record) {
            tracing::debug!(path = %record.path, label = %record.label, "label has no segments");
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "records without usable labels");
    }
    builder.finish()
}
