//! Literal-prefix path helpers.
//!
//! Hierarchy in a [`PathStore`](crate::PathStore) is plain string prefixing:
//! no path is parsed into segments before comparison. A consequence is that
//! `/foobar` counts as being inside `/foo`.

/// True if `path` equals `prefix` or starts with it.
pub fn is_within(path: &str, prefix: &str) -> bool {
    path.starts_with(prefix)
}

/// True if `path` starts with `ancestor` and is not equal to it.
pub fn is_descendant(path: &str, ancestor: &str) -> bool {
    path.len() > ancestor.len() && path.starts_with(ancestor)
}

/// The segment of `path` that immediately follows `ancestor`.
///
/// One leading `/` of the remainder is skipped, and the segment ends at the
/// next `/` (or the end of the string). Returns the segment together with
/// its byte offset in `path`, or `None` if `path` is not within `ancestor`.
///
/// ```rust
/// use path_store::prefix::next_segment;
///
/// assert_eq!(next_segment("/foo/bar/baz", "/foo"), Some((5, "bar")));
/// assert_eq!(next_segment("/foo/bar", ""), Some((1, "foo")));
/// assert_eq!(next_segment("/other", "/foo"), None);
/// ```
pub fn next_segment<'a>(path: &'a str, ancestor: &str) -> Option<(usize, &'a str)> {
    let rest = path.strip_prefix(ancestor)?;
    let (offset, rest) = match rest.strip_prefix('/') {
        Some(stripped) => (ancestor.len() + 1, stripped),
        None => (ancestor.len(), rest),
    };
    let segment = rest.split('/').next().unwrap_or(rest);
    Some((offset, segment))
}

/// The segment of `path` that ends right before byte offset `at`.
///
/// A single `/` directly before `at` is treated as the separator and not
/// as part of the segment.
pub fn segment_before(path: &str, at: usize) -> &str {
    let head = path.get(..at).unwrap_or(path);
    let head = head.strip_suffix('/').unwrap_or(head);
    head.rsplit('/').next().unwrap_or(head)
}

/// Replace the `from` prefix of `path` with `to`, keeping the remainder
/// verbatim. Returns `None` if `path` does not start with `from`.
pub fn rebase(path: &str, from: &str, to: &str) -> Option<String> {
    let rest = path.strip_prefix(from)?;
    let mut rebased = String::with_capacity(to.len() + rest.len());
    rebased.push_str(to);
    rebased.push_str(rest);
    Some(rebased)
}
