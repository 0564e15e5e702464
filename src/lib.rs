//! # navmark
//!
//! Marks the current page in navigation link sets for static site
//! pipelines. Given a link collection — an in-memory mapping, a JSON/TOML
//! table file, or a directory tree of entry files — and the URL of the page
//! being rendered, navmark produces an annotated copy where every link
//! gains a boolean `current` flag.
//!
//! # Architecture: Resolve, Then Mark
//!
//! The pipeline has two independent stages:
//!
//! ```text
//! 1. Resolve   link source  →  ordered key → entry mapping
//! 2. Mark      entries      →  AnnotatedLink[]  (current flag per entry)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Source independence**: the marker depends on a single trait method
//!   (`LinkSource::resolve`), so new source kinds never touch the marking
//!   logic.
//! - **Testability**: resolution is the only place IO happens; marking is
//!   a pure function from entries to entries, so unit tests can exercise
//!   every comparison edge case without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | `LinkSource` trait + inline, file and directory resolvers |
//! | [`mark`] | The annotation step: `mark_current` and per-entry `annotate` |
//! | [`types`] | Shared serde types (`LinkEntry`, `AnnotatedLink`, `ResolvedLinks`) |
//! | [`naming`] | `NNN-name` filename convention parser used by directory sources |
//! | [`output`] | CLI output formatting — information-first display of link sets |
//!
//! # Design Decisions
//!
//! ## Exact Href Equality
//!
//! A link is current when its `href` equals the current page string,
//! character for character. No trailing-slash folding, no case folding, no
//! URL parsing, no query-string stripping. Normalization policy belongs to
//! the surrounding site generator, which knows how its URLs are shaped;
//! baking a policy in here would silently disagree with it.
//!
//! ## Opaque Passthrough Fields
//!
//! Entries carry arbitrary fields beyond `href` (labels, titles, rel
//! attributes). navmark captures them with `#[serde(flatten)]` and writes
//! them back untouched — shallow, not deep-cloned. The marker adds exactly
//! one field and claims no knowledge of the rest.
//!
//! ## Order Preservation
//!
//! Output order is resolved order, entry for entry. JSON sources rely on
//! serde_json's `preserve_order` feature so a hand-written links file
//! round-trips in its author's order; directory sources order by the
//! `NNN-name` prefix convention.
//!
//! ## Absent Source Is Not An Error
//!
//! A page with no navigation configured is a normal page. `mark_current`
//! takes an `Option` and maps `None` to an empty, typed collection so
//! callers never branch on a sentinel.
//!
//! # Example
//!
//! ```rust
//! use navmark::mark::mark_current;
//! use navmark::resolve::InlineLinks;
//! use navmark::types::LinkEntry;
//!
//! let links: InlineLinks = [
//!     ("home".to_string(), LinkEntry::new("/index.html")),
//!     ("docs".to_string(), LinkEntry::new("/docs/")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let marked = mark_current(Some(&links), "/docs/").unwrap();
//! assert!(!marked[0].current);
//! assert!(marked[1].current);
//! ```

pub mod mark;
pub mod naming;
pub mod output;
pub mod resolve;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
