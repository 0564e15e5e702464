//! Shared types used across resolution, marking, and the CLI.
//!
//! These types are what link sources produce and what annotated output is
//! serialized from, so they must stay identical across all stages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One navigation link as found in a link source.
///
/// `href` is the page identifier compared against the current page. Every
/// other field (label, title, rel, ...) is opaque to navmark: captured into
/// `extra` on deserialization and written back out unchanged.
///
/// A missing `href` is representable and is not an error — such an entry
/// simply can never be the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkEntry {
    /// Entry with an href and no extra fields.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            extra: Map::new(),
        }
    }

    /// Add an opaque passthrough field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A link annotated with whether it points at the page being rendered.
///
/// Field order matters: `current` serializes first, then `href`, then the
/// passthrough fields, so annotated output always leads with the computed
/// flag.
///
/// Passthrough is shallow — composite `extra` values are shared with the
/// input entry, not deep-cloned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedLink {
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Concrete, ordered key → entry mapping produced by resolution.
///
/// Keys carry each entry's identity within its source (file stem, table
/// key); the order is the source's order. Marking discards the keys and
/// keeps the order.
pub type ResolvedLinks = Vec<(String, LinkEntry)>;
