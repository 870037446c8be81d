//! Per-call options for mutating operations.

/// Controls side effects of a single mutation.
///
/// The default notifies observers. Use [`UpdateOptions::silent`] for the
/// intermediate steps of a batch and finish with
/// [`PathStore::notify`](crate::PathStore::notify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Publish a change notification once the mutation is applied.
    pub notify: bool,
}

impl UpdateOptions {
    /// Options that suppress the change notification.
    pub const fn silent() -> Self {
        Self { notify: false }
    }
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self { notify: true }
    }
}
