//! Link source resolution.
//!
//! A link collection can arrive as anything from an in-memory mapping to a
//! directory tree of entry files. [`LinkSource`] is the single seam the
//! marker depends on: resolve to a concrete, ordered key → entry mapping,
//! or fail. The marker never sees where the links came from.
//!
//! ## Sources
//!
//! - [`InlineLinks`] — an already-concrete collection, for callers that
//!   build their nav in code.
//! - [`LinkFile`] — one JSON or TOML document whose top-level table maps
//!   key → entry:
//!
//!   ```toml
//!   [home]
//!   href = "/index.html"
//!   label = "Home"
//!
//!   [docs]
//!   href = "/docs/"
//!   label = "Documentation"
//!   ```
//!
//! - [`LinkDir`] — a directory tree where each `.json`/`.toml` file is one
//!   entry. The filesystem is the collection:
//!
//!   ```text
//!   links/
//!   ├── 010-home.toml            → key "home"
//!   ├── 020-docs/
//!   │   ├── 010-guide.toml       → key "docs/guide"
//!   │   └── 020-api.json         → key "docs/api"
//!   └── github.toml              → key "github" (unnumbered, sorts last)
//!   ```
//!
//! ## Ordering
//!
//! File sources keep document order (table key order). Directory sources
//! order siblings by the `NNN-name` convention (see [`crate::naming`]):
//! numbered entries first by prefix, unnumbered after by name, applied at
//! every directory level.
//!
//! ## Validation
//!
//! Resolution enforces exactly one shape rule: every entry must be a table.
//! What the table contains is not validated here — an entry without an
//! `href` resolves fine and is simply never current.

use crate::naming;
use crate::types::{LinkEntry, ResolvedLinks};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Unsupported link source format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Link source is not a table of entries: {0}")]
    NotATable(PathBuf),
    #[error("Link entry '{0}' is not a table")]
    EntryNotATable(String),
    #[error("Duplicate link key '{0}' from {1}")]
    DuplicateKey(String, PathBuf),
}

/// A resolvable representation of a link collection.
///
/// Implementations turn whatever they wrap into a concrete, ordered
/// key → [`LinkEntry`] mapping. Resolution is the only place IO happens;
/// everything downstream is a pure transformation.
pub trait LinkSource {
    fn resolve(&self) -> Result<ResolvedLinks, ResolveError>;
}

// ============================================================================
// Inline source
// ============================================================================

/// An already-concrete link collection. Resolution clones and never fails.
#[derive(Debug, Clone, Default)]
pub struct InlineLinks {
    links: ResolvedLinks,
}

impl InlineLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, entry: LinkEntry) {
        self.links.push((key.into(), entry));
    }
}

impl FromIterator<(String, LinkEntry)> for InlineLinks {
    fn from_iter<I: IntoIterator<Item = (String, LinkEntry)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

impl LinkSource for InlineLinks {
    fn resolve(&self) -> Result<ResolvedLinks, ResolveError> {
        Ok(self.links.clone())
    }
}

// ============================================================================
// File source
// ============================================================================

/// A single JSON or TOML document mapping key → entry.
///
/// The document's top level must be a table; each value must itself be a
/// table. Key order in the document is the resolved order.
#[derive(Debug, Clone)]
pub struct LinkFile {
    path: PathBuf,
}

impl LinkFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LinkSource for LinkFile {
    fn resolve(&self) -> Result<ResolvedLinks, ResolveError> {
        let content = fs::read_to_string(&self.path)?;
        match extension_of(&self.path).as_str() {
            "json" => resolve_json_table(&content, &self.path),
            "toml" => resolve_toml_table(&content),
            _ => Err(ResolveError::UnsupportedFormat(self.path.clone())),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn resolve_json_table(content: &str, path: &Path) -> Result<ResolvedLinks, ResolveError> {
    let serde_json::Value::Object(table) = serde_json::from_str(content)? else {
        return Err(ResolveError::NotATable(path.to_path_buf()));
    };
    table
        .into_iter()
        .map(|(key, value)| {
            if !value.is_object() {
                return Err(ResolveError::EntryNotATable(key));
            }
            let entry: LinkEntry = serde_json::from_value(value)?;
            Ok((key, entry))
        })
        .collect()
}

fn resolve_toml_table(content: &str) -> Result<ResolvedLinks, ResolveError> {
    let table: toml::Table = toml::from_str(content)?;
    table
        .into_iter()
        .map(|(key, value)| {
            if !value.is_table() {
                return Err(ResolveError::EntryNotATable(key));
            }
            let entry: LinkEntry = value.try_into()?;
            Ok((key, entry))
        })
        .collect()
}

// ============================================================================
// Directory source
// ============================================================================

/// A directory tree of one-entry-per-file documents.
///
/// Dotfiles and files with other extensions are skipped, so a link
/// directory can sit next to editor droppings and README files without
/// breaking resolution.
///
/// Keys are relative paths with number prefixes and extensions stripped,
/// components joined with `/`. Two files collapsing onto the same key
/// (say `010-home.toml` and `home.json`) is an error, not a silent
/// overwrite.
#[derive(Debug, Clone)]
pub struct LinkDir {
    root: PathBuf,
}

const ENTRY_EXTENSIONS: &[&str] = &["json", "toml"];

impl LinkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LinkSource for LinkDir {
    fn resolve(&self) -> Result<ResolvedLinks, ResolveError> {
        let mut links = ResolvedLinks::new();
        let mut seen: HashSet<String> = HashSet::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_key(|e| naming::sort_key(&e.file_name().to_string_lossy()))
            .into_iter()
            .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));

        for dir_entry in walker {
            let dir_entry = dir_entry?;
            if dir_entry.file_type().is_dir() {
                continue;
            }
            let path = dir_entry.path();
            if !ENTRY_EXTENSIONS.contains(&extension_of(path).as_str()) {
                continue;
            }

            let key = entry_key(path, &self.root);
            if !seen.insert(key.clone()) {
                return Err(ResolveError::DuplicateKey(key, path.to_path_buf()));
            }
            links.push((key, read_entry_file(path)?));
        }

        Ok(links)
    }
}

/// Derive a link key from an entry file path: components relative to the
/// source root, each with its `NNN-` prefix stripped, extension dropped.
fn entry_key(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| {
            let raw = c.as_os_str().to_string_lossy();
            let parsed = naming::parse_entry_name(&raw);
            if parsed.name.is_empty() {
                raw.into_owned()
            } else {
                parsed.name
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Parse a one-entry document. The whole document is the entry table.
fn read_entry_file(path: &Path) -> Result<LinkEntry, ResolveError> {
    let content = fs::read_to_string(path)?;
    let key = || {
        path.file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    match extension_of(path).as_str() {
        "json" => {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            if !value.is_object() {
                return Err(ResolveError::EntryNotATable(key()));
            }
            Ok(serde_json::from_value(value)?)
        }
        "toml" => Ok(toml::from_str(&content)?),
        _ => Err(ResolveError::UnsupportedFormat(path.to_path_buf())),
    }
}
