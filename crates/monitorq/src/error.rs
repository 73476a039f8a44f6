//! Error types for queue operations.

use thiserror::Error;

/// Errors returned by [`BoundedQueue::push`](crate::BoundedQueue::push).
///
/// The failed item rides along in the error so the caller decides its
/// fate; the queue never swallows an item on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PushError<T> {
    /// The queue is shutting down and no longer accepts items. The rejected
    /// item is handed back unmodified.
    #[error("queue is shutting down; item rejected")]
    ShuttingDown(T),
}

impl<T> PushError<T> {
    /// Consumes the error and returns the rejected item.
    pub fn into_item(self) -> T {
        match self {
            Self::ShuttingDown(item) => item,
        }
    }

    /// Returns `true` if this error indicates the queue is permanently
    /// unusable for new items.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ShuttingDown(_))
    }
}
