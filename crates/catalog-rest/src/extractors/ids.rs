//! Identifiers taken from the URL path.
//!
//! Path segments are captured as text and parsed leniently: a segment that
//! is not a valid, non-nil UUID becomes `None`, so the request still reaches
//! the pipeline and fails validation on the matching field.

use std::str::FromStr;

/// Parses a path segment into a typed id, or `None` when it does not parse.
pub fn path_id<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
