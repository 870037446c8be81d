//! Structured child records.

/// One immediate child of a queried path, as returned by
/// [`PathStore::children`](crate::PathStore::children).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildEntry<'a> {
    /// The first stored path that produced this child.
    pub full_path: &'a str,
    /// The segment immediately after the queried path.
    pub name: &'a str,
    /// The segment immediately before `name` in `full_path`.
    pub parent: &'a str,
}
