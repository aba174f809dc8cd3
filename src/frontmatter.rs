//! Front-matter field extraction.
//!
//! Documents opt in to navigation by carrying a metadata block at the very
//! top of the file:
//!
//! ```text
//! ---
//! title: Guide/Getting Started
//! order: 3
//! ---
//! # Getting Started
//! ```
//!
//! Only the opening and closing `---` lines and flat `key: value` lines are
//! understood; this is not a YAML parser. Anything it cannot read counts as
//! "no value", and the document stays out of the sidebar.
//!
//! ## Value normalization
//!
//! - Surrounding whitespace is trimmed.
//! - One matching pair of surrounding quotes is removed:
//!   `"Modules/Example"` → `Modules/Example`, `'A'` → `A`.
//!   Mismatched quotes (`"A'`) are kept as written.
//! - A value that is empty afterwards counts as absent.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Opening `---` line at the start of the text, an optional lazy body, then
/// a closing line of exactly `---`. The empty body is tried first so that
/// `---\n---` closes immediately.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)??---(?:\r?\n|\z)")
        .expect("block pattern must compile")
});

/// Return the body of the leading metadata block, without its delimiters.
///
/// An empty block yields `Some("")`.
pub fn metadata_block(text: &str) -> Option<&str> {
    BLOCK
        .captures(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Matches `field: value` lines inside a metadata block.
///
/// Build one per scan and reuse it for every document.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    field: String,
    pattern: Regex,
}

impl FieldExtractor {
    pub fn new(field: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?m)^{}:[ \t]*(.+)$", regex::escape(field)))
            .expect("escaped field pattern must compile");
        Self {
            field: field.to_string(),
            pattern,
        }
    }

    /// Name of the field this extractor looks for.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Extract the field's value from a document's raw text.
    ///
    /// Returns `None` when there is no leading block, the field is missing,
    /// or its value is empty after normalization. The first matching line
    /// wins.
    pub fn extract(&self, text: &str) -> Option<String> {
        let body = metadata_block(text)?;
        let raw = self.pattern.captures(body)?.get(1)?.as_str();
        let value = unquote(raw.trim());
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Read a file and extract the field.
    ///
    /// Unreadable files (missing, permission denied, not UTF-8) yield `None`.
    pub fn read(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => self.extract(&content),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "unreadable document");
                None
            }
        }
    }
}

/// One-shot form of [`FieldExtractor::extract`].
pub fn extract_field(text: &str, field: &str) -> Option<String> {
    FieldExtractor::new(field).extract(text)
}

/// One-shot form of [`FieldExtractor::read`].
pub fn read_field(path: &Path, field: &str) -> Option<String> {
    FieldExtractor::new(field).read(path)
}

/// Strip one matching pair of surrounding `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
