//! End-to-end tests: link collections on disk, resolved and marked
//! through the public API.

use navmark::mark::mark_current;
use navmark::resolve::{LinkDir, LinkFile, LinkSource};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A small site's link directory: three numbered sections, one nested,
/// one unnumbered external link.
fn site_links() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("010-home.toml"),
        "href = \"/index.html\"\nlabel = \"Home\"\n",
    )
    .unwrap();

    let docs = tmp.path().join("020-docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(
        docs.join("010-guide.toml"),
        "href = \"/docs/guide/\"\nlabel = \"Guide\"\n",
    )
    .unwrap();
    fs::write(
        docs.join("020-api.json"),
        r#"{ "href": "/docs/api/", "label": "API" }"#,
    )
    .unwrap();

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

fn write_links_json(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("links.json");
    fs::write(
        &path,
        r#"{
  "home":  { "href": "/index.html", "label": "Home" },
  "blog":  { "href": "/blog/", "label": "Blog", "rel": "alternate" },
  "about": { "href": "/about/", "label": "About" }
}"#,
    )
    .unwrap();
    path
}

#[test]
fn dir_source_marks_nested_page() {
    let tmp = site_links();
    let source = LinkDir::new(tmp.path());

    let marked = mark_current(Some(&source), "/docs/api/").unwrap();

    let flags: Vec<bool> = marked.iter().map(|l| l.current).collect();
    assert_eq!(flags, vec![false, false, true, false, false]);
}

#[test]
fn dir_source_order_survives_marking() {
    let tmp = site_links();
    let source = LinkDir::new(tmp.path());

    let marked = mark_current(Some(&source), "/nowhere").unwrap();

    let hrefs: Vec<&str> = marked.iter().filter_map(|l| l.href.as_deref()).collect();
    assert_eq!(
        hrefs,
        vec![
            "/index.html",
            "/docs/guide/",
            "/docs/api/",
            "/about/",
            "https://github.com/example/site",
        ]
    );
}

#[test]
fn file_source_round_trips_author_order_and_fields() {
    let tmp = TempDir::new().unwrap();
    let path = write_links_json(tmp.path());
    let source = LinkFile::new(&path);

    let marked = mark_current(Some(&source), "/blog/").unwrap();
    let value = serde_json::to_value(&marked).unwrap();

    assert_eq!(
        value,
        json!([
            { "current": false, "href": "/index.html", "label": "Home" },
            { "current": true,  "href": "/blog/", "label": "Blog", "rel": "alternate" },
            { "current": false, "href": "/about/", "label": "About" }
        ])
    );
}

#[test]
fn file_source_serialized_entries_lead_with_current() {
    let tmp = TempDir::new().unwrap();
    let path = write_links_json(tmp.path());
    let source = LinkFile::new(&path);

    let marked = mark_current(Some(&source), "/blog/").unwrap();
    let compact = serde_json::to_string(&marked).unwrap();

    assert!(compact.contains(r#"{"current":true,"href":"/blog/""#));
}

#[test]
fn toml_and_json_entries_mix_in_one_dir() {
    let tmp = site_links();
    let resolved = LinkDir::new(tmp.path()).resolve().unwrap();

    assert_eq!(resolved.len(), 5);
    let keys: Vec<&str> = resolved.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["home", "docs/guide", "docs/api", "about", "github"]
    );
}

#[test]
fn no_page_matches_external_only_current() {
    let tmp = site_links();
    let source = LinkDir::new(tmp.path());

    // Current page given as a local path never equals the external href
    let marked = mark_current(Some(&source), "github.com/example/site").unwrap();
    assert!(marked.iter().all(|l| !l.current));
}

#[test]
fn absent_source_is_empty_not_error() {
    let marked = mark_current(None::<&LinkDir>, "/docs/").unwrap();
    assert!(marked.is_empty());
}

#[test]
fn unreadable_source_propagates_to_caller() {
    let tmp = TempDir::new().unwrap();
    let source = LinkFile::new(tmp.path().join("missing.toml"));

    let result = mark_current(Some(&source), "/docs/");
    assert!(result.is_err());
}
