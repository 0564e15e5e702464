//! Current-page marking.
//!
//! The transformation this crate exists for: given a link source and the
//! URL of the page being rendered, produce an annotated copy of the
//! collection where every entry carries a `current` flag.
//!
//! Marking is pure. Resolution (the only IO) happens behind the
//! [`LinkSource`] seam before any entry is touched, and the output is a
//! freshly built sequence — input entries are consumed, never mutated in
//! place.

use crate::resolve::{LinkSource, ResolveError};
use crate::types::{AnnotatedLink, LinkEntry};

/// Resolve `source` and annotate every entry with whether it points at
/// `current_page`.
///
/// A missing source means "no links", not an error: the result is an empty
/// `Vec`. Resolution failures propagate unwrapped — no recovery, no
/// retries.
///
/// Entries keep their resolved order; keys are discarded. The comparison
/// is exact, case-sensitive string equality: `/docs` and `/docs/` are
/// different pages, and an entry without an `href` is never current. An
/// empty `current_page` is compared literally, so an entry whose `href`
/// is the empty string would match it.
pub fn mark_current<S>(
    source: Option<&S>,
    current_page: &str,
) -> Result<Vec<AnnotatedLink>, ResolveError>
where
    S: LinkSource + ?Sized,
{
    let Some(source) = source else {
        return Ok(Vec::new());
    };
    let links = source.resolve()?;
    Ok(links
        .into_iter()
        .map(|(_, entry)| annotate(entry, current_page))
        .collect())
}

/// Annotate a single entry.
///
/// All fields pass through shallowly — composite values are moved, not
/// deep-cloned. A pre-existing `current` field is dropped in favor of the
/// computed flag so the output carries exactly one `current`.
pub fn annotate(mut entry: LinkEntry, current_page: &str) -> AnnotatedLink {
    // shift_remove: with preserve_order, plain remove would swap a later
    // field into this slot and scramble passthrough order.
    entry.extra.shift_remove("current");
    AnnotatedLink {
        current: entry.href.as_deref() == Some(current_page),
        href: entry.href,
        extra: entry.extra,
    }
}
