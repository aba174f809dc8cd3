//! Shared types passed between pipeline stages.
//!
//! [`DocumentRecord`] is produced by the scanner and consumed by the tree
//! builder. [`NavNode`] is the builder's output and is serialized into the
//! host configuration in the sidebar shape the host expects:
//!
//! ```text
//! Group → { text, collapsed, items }
//! Leaf  → { text, link }
//! ```

use serde::{Deserialize, Serialize};

/// A document discovered by the scanner that carries a navigation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Root-relative link with a leading `/` and the extension stripped,
    /// e.g. `/guide/intro` for `guide/intro.md`.
    pub path: String,
    /// Front-matter label, e.g. `Guide/Introduction`. Never empty.
    pub label: String,
}

impl DocumentRecord {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// One entry in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// A named container of other entries. Has no link.
    Group {
        text: String,
        collapsed: bool,
        items: Vec<NavNode>,
    },
    /// A link to a single document.
    Leaf { text: String, link: String },
}

impl NavNode {
    /// Display name shown in the sidebar.
    pub fn text(&self) -> &str {
        match self {
            NavNode::Group { text, .. } | NavNode::Leaf { text, .. } => text,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            NavNode::Leaf { link, .. } => Some(link),
            NavNode::Group { .. } => None,
        }
    }

    /// Children of a group; leaves have none.
    pub fn items(&self) -> &[NavNode] {
        match self {
            NavNode::Group { items, .. } => items,
            NavNode::Leaf { .. } => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavNode::Group { .. })
    }
}

/// Count the leaves in a tree, at any depth.
pub fn count_leaves(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            NavNode::Leaf { .. } => 1,
            NavNode::Group { items, .. } => count_leaves(items),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_serializes_without_items() {
        let leaf = NavNode::Leaf {
            text: "Intro".into(),
            link: "/guide/intro".into(),
        };
        let json = serde_json::to_value(&leaf).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "Intro", "link": "/guide/intro" })
        );
    }

    #[test]
    fn group_serializes_in_sidebar_shape() {
        let group = NavNode::Group {
            text: "Guide".into(),
            collapsed: true,
            items: vec![NavNode::Leaf {
                text: "Intro".into(),
                link: "/intro".into(),
            }],
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Guide",
                "collapsed": true,
                "items": [{ "text": "Intro", "link": "/intro" }],
            })
        );
    }

    #[test]
    fn deserialize_distinguishes_variants() {
        let nodes: Vec<NavNode> = serde_json::from_str(
            r#"[{"text":"A","collapsed":false,"items":[]},{"text":"B","link":"/b"}]"#,
        )
        .unwrap();
        assert!(nodes[0].is_group());
        assert_eq!(nodes[1].link(), Some("/b"));
    }

    #[test]
    fn count_leaves_walks_nested_groups() {
        let tree = vec![
            NavNode::Leaf {
                text: "A".into(),
                link: "/a".into(),
            },
            NavNode::Group {
                text: "G".into(),
                collapsed: true,
                items: vec![
                    NavNode::Leaf {
                        text: "B".into(),
                        link: "/b".into(),
                    },
                    NavNode::Group {
                        text: "H".into(),
                        collapsed: true,
                        items: vec![],
                    },
                ],
            },
        ];
        assert_eq!(count_leaves(&tree), 2);
    }
}
