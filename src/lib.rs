//! # docnav
//!
//! Builds a documentation-site sidebar from the front matter of a Markdown
//! tree. Pages opt in by giving themselves a title, and the title's
//! `/`-separated segments decide where they sit:
//!
//! ```text
//! docs/guide/intro.md     title: Guide/Introduction
//! docs/guide/config.md    title: Guide/Configuration     Guide
//! docs/api/client.md      title: API/Client         →    ├── Introduction
//! docs/scratch.md         (no front matter)              └── Configuration
//!                                                        API
//!                                                        └── Client
//! ```
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan    docs/     →  Vec<DocumentRecord>   (path + label per titled page)
//! 2. Build   records   →  Vec<NavNode>          (groups and links)
//!    Assemble tree     →  site config           (themeConfig.sidebar, fs allow list)
//! ```
//!
//! Both stages are pure functions over their input, so the tree logic is
//! tested without touching the filesystem and the scanner is tested without
//! caring about tree shape.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Reads one field out of a leading `---` metadata block |
//! | [`scan`] | Stage 1: walks the source directory, collects titled documents |
//! | [`tree`] | Stage 2: folds labels into a nested, order-preserving tree |
//! | [`assemble`] | Validates settings, runs both stages, merges into the site config |
//! | [`config`] | `docnav.toml` loading, layering, validation, stock config |
//! | [`types`] | Shared types (`DocumentRecord`, `NavNode`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Tolerant Parsing
//!
//! A document that cannot be read, has no metadata block, or has an empty
//! title is left out of the sidebar. Nothing below the source root can fail
//! a build; a half-written page is invisible rather than fatal.
//!
//! ## Filesystem Order
//!
//! Sibling order is the order the filesystem lists entries, then the order
//! labels are first seen. There is no sorting step and no ordering key.

pub mod assemble;
pub mod config;
pub mod frontmatter;
pub mod output;
pub mod scan;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
