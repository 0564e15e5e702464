//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: every link leads with
//! its positional index and display label, with the href and current-page
//! status shown as indented context lines. Each command has a `format_*`
//! function (returns `Vec<String>`) for testability and a `print_*`
//! wrapper that writes to stdout. Format functions are pure — no IO, no
//! side effects.
//!
//! ## Mark
//!
//! ```text
//! Links
//! 001 Home
//!     Href: /index.html
//! 002 About
//!     Href: /about/
//!     Current page
//! 003 (no href)
//!
//! Marked 1 of 3 links current
//! ```
//!
//! ## Check
//!
//! ```text
//! Links
//! 001 home
//!     Href: /index.html
//! 002 about
//!     Href: /about/
//!
//! 2 links resolved
//! ```

use crate::types::{AnnotatedLink, ResolvedLinks};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display label for a link: the `label` or `title` passthrough field if
/// present, otherwise the href.
fn link_label(link: &AnnotatedLink) -> Option<&str> {
    link.extra
        .get("label")
        .and_then(|v| v.as_str())
        .or_else(|| link.extra.get("title").and_then(|v| v.as_str()))
}

// ============================================================================
// Mark output
// ============================================================================

/// Format mark output: every link with its href, current one flagged.
pub fn format_mark_output(links: &[AnnotatedLink]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Links".to_string());

    if links.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }

    for (i, link) in links.iter().enumerate() {
        match (link_label(link), link.href.as_deref()) {
            (Some(label), href) => {
                lines.push(format!("{} {}", format_index(i + 1), label));
                if let Some(href) = href {
                    lines.push(format!("    Href: {}", href));
                }
            }
            (None, Some(href)) => {
                lines.push(format!("{} {}", format_index(i + 1), href));
            }
            (None, None) => {
                lines.push(format!("{} (no href)", format_index(i + 1)));
            }
        }
        if link.current {
            lines.push("    Current page".to_string());
        }
    }

    let current_count = links.iter().filter(|l| l.current).count();
    lines.push(String::new());
    lines.push(if current_count == 0 {
        format!("No current page among {} links", links.len())
    } else {
        format!("Marked {} of {} links current", current_count, links.len())
    });

    lines
}

/// Print mark output to stdout.
pub fn print_mark_output(links: &[AnnotatedLink]) {
    for line in format_mark_output(links) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check output: resolved keys with their hrefs.
pub fn format_check_output(links: &ResolvedLinks) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Links".to_string());

    if links.is_empty() {
        lines.push("    (none)".to_string());
    }

    for (i, (key, entry)) in links.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), key));
        match entry.href.as_deref() {
            Some(href) => lines.push(format!("    Href: {}", href)),
            None => lines.push("    (no href)".to_string()),
        }
    }

    lines.push(String::new());
    lines.push(format!("{} links resolved", links.len()));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(links: &ResolvedLinks) {
    for line in format_check_output(links) {
        println!("{}", line);
    }
}
