//! Shared test utilities for the navmark test suite.
//!
//! Provides a standard on-disk link directory fixture plus extractors and
//! lookup helpers for resolved and annotated links.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_link_dir();
//! let resolved = LinkDir::new(tmp.path()).resolve().unwrap();
//! assert_eq!(keys(&resolved)[0], "home");
//!
//! let marked = mark_current(Some(&LinkDir::new(tmp.path())), "/about/").unwrap();
//! assert_eq!(current_link(&marked).href.as_deref(), Some("/about/"));
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::{AnnotatedLink, ResolvedLinks};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write the standard link directory fixture into a temp dir.
///
/// ```text
/// 010-home.toml           href = "/index.html", label = "Home"
/// 020-docs/
///   010-guide.toml        href = "/docs/guide/"
///   020-api.json          href = "/docs/api/"
/// 030-about.json          href = "/about/", label = "About"
/// github.toml             external link, unnumbered (sorts last)
/// ```
///
/// Tests get an isolated copy they can mutate without affecting other
/// tests.
pub fn setup_link_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("010-home.toml"),
        "href = \"/index.html\"\nlabel = \"Home\"\n",
    )
    .unwrap();

    let docs = tmp.path().join("020-docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("010-guide.toml"), "href = \"/docs/guide/\"\n").unwrap();
    fs::write(docs.join("020-api.json"), r#"{ "href": "/docs/api/" }"#).unwrap();

    fs::write(
        tmp.path().join("030-about.json"),
        r#"{ "href": "/about/", "label": "About" }"#,
    )
    .unwrap();

    fs::write(
        tmp.path().join("github.toml"),
        "href = \"https://github.com/example/site\"\nlabel = \"GitHub\"\n",
    )
    .unwrap();

    tmp
}

// =========================================================================
// Extractors
// =========================================================================

/// Keys in resolved order.
pub fn keys(links: &ResolvedLinks) -> Vec<&str> {
    links.iter().map(|(key, _)| key.as_str()).collect()
}

/// Hrefs in output order.
pub fn hrefs(links: &[AnnotatedLink]) -> Vec<Option<&str>> {
    links.iter().map(|l| l.href.as_deref()).collect()
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// The single current link. Panics if zero or several are marked.
pub fn current_link(links: &[AnnotatedLink]) -> &AnnotatedLink {
    let current: Vec<&AnnotatedLink> = links.iter().filter(|l| l.current).collect();
    match current.as_slice() {
        [one] => one,
        _ => panic!(
            "expected exactly one current link, got {}. Hrefs: {:?}",
            current.len(),
            hrefs(links)
        ),
    }
}
