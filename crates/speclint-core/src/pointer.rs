//! JSON-pointer style references into a document.
//!
//! References are URI fragments (`#/definitions/Pet`). Each segment is
//! escaped per RFC 6901, so a path template like `/pets/{id}` becomes
//! `#/paths/~1pets~1{id}`.

use std::borrow::Cow;

/// Reference of the document root.
pub const ROOT: &str = "#";

/// Escape a single pointer segment (`~` -> `~0`, `/` -> `~1`).
pub fn escape(segment: &str) -> Cow<'_, str> {
    if segment.contains(['~', '/']) {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Reverse of [`escape`].
pub fn unescape(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Append one escaped segment to `base`.
pub fn join(base: &str, segment: &str) -> String {
    let escaped = escape(segment);
    let mut out = String::with_capacity(base.len() + 1 + escaped.len());
    out.push_str(base);
    out.push('/');
    out.push_str(&escaped);
    out
}

/// Canonical reference of a named definition: `#/definitions/<name>`.
pub fn definition(name: &str) -> String {
    join(&join(ROOT, "definitions"), name)
}

/// Name of the definition a `$ref` points at, if it points into `#/definitions`.
pub fn definition_name(reference: &str) -> Option<Cow<'_, str>> {
    let name = reference.strip_prefix("#/definitions/")?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(unescape(name))
}
