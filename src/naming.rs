//! Centralized filename parsing for the NNN-name convention.
//!
//! Directory-backed link sources order their entries with an optional
//! numeric prefix followed by a name: `010-home.toml` sorts before
//! `020-docs.toml`, and files without a prefix sort after every numbered
//! one, by name. The prefix is stripped when the filename becomes a link
//! key, so `010-home.toml` resolves under the key `home`.

/// Result of parsing an entry name like `020-docs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `20` from `020-docs`)
    pub number: Option<u32>,
    /// Name part after `NNN-`. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
}

/// Parse an entry name following the `NNN-name` convention.
///
/// Handles these patterns:
/// - `"020-docs"` → number=Some(20), name="docs"
/// - `"010-getting-started"` → number=Some(10), name="getting-started"
/// - `"001"` → number=Some(1), name=""
/// - `"001-"` → number=Some(1), name=""
/// - `"github"` → number=None, name="github"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some(dash_pos) = name.find('-')
        && let Ok(num) = name[..dash_pos].parse::<u32>()
    {
        return ParsedName {
            number: Some(num),
            name: name[dash_pos + 1..].to_string(),
        };
    }
    // Pure number, no dash
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
        };
    }
    ParsedName {
        number: None,
        name: name.to_string(),
    }
}

/// Sort key for sibling entries: numbered first by prefix, unnumbered
/// after by name.
pub fn sort_key(name: &str) -> (u32, String) {
    let parsed = parse_entry_name(name);
    (parsed.number.unwrap_or(u32::MAX), parsed.name)
}
