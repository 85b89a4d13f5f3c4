//! Errors raised by misuse of a [`PriorityQueue`].
//!
//! Both kinds are programmer errors: the panicking methods ([`dequeue`], [`peek`],
//! [`remove`], [`contains`], [`take`]) abort the call with the error's message, while
//! their `try_` counterparts hand the error back.  An element that simply isn't in
//! the queue is never an error.
//!
//! [`PriorityQueue`]: crate::PriorityQueue
//! [`dequeue`]: crate::PriorityQueue::dequeue
//! [`peek`]: crate::PriorityQueue::peek
//! [`remove`]: crate::PriorityQueue::remove
//! [`contains`]: crate::PriorityQueue::contains
//! [`take`]: crate::PriorityQueue::take

use cfg_if::cfg_if;
use core::fmt;

/// The queue operation that failed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    /// Removal of the highest-priority element.
    Dequeue,
    /// Inspection of the highest-priority element.
    Peek,
    /// Removal of an element by value.
    Remove,
    /// Membership test by value.
    Contains,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Dequeue => "dequeue",
            Operation::Peek => "peek",
            Operation::Remove => "remove",
            Operation::Contains => "execute contains",
        }
    }
}

/// Details of the misuse that caused a [`QueueError`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum QueueErrorKind {
    /// An element was required but the queue holds none.
    Empty,

    /// A search by value was attempted before an equality comparer was set.
    EqualityNotSet,
}

/// The error type for the fallible `try_` methods of [`PriorityQueue`].
///
/// [`PriorityQueue`]: crate::PriorityQueue
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QueueError {
    kind: QueueErrorKind,
    operation: Operation,
}

impl QueueError {
    pub(crate) const fn empty(operation: Operation) -> Self {
        Self { kind: QueueErrorKind::Empty, operation }
    }

    pub(crate) const fn equality_not_set(operation: Operation) -> Self {
        Self { kind: QueueErrorKind::EqualityNotSet, operation }
    }

    /// Details about the misuse.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> QueueErrorKind {
        self.kind
    }

    /// The operation that was refused.
    #[inline]
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "cannot {}", self.operation.verb())?;
        let reason = match self.kind {
            QueueErrorKind::Empty => ": priority queue is empty",
            QueueErrorKind::EqualityNotSet => ": equality comparer was not set",
        };
        fmt.write_str(reason)
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for QueueError {}
    } else if #[cfg(feature = "error_in_core")] {
        impl core::error::Error for QueueError {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_operation_and_the_cause() {
        assert_eq!(
            QueueError::empty(Operation::Dequeue).to_string(),
            "cannot dequeue: priority queue is empty"
        );
        assert_eq!(
            QueueError::empty(Operation::Peek).to_string(),
            "cannot peek: priority queue is empty"
        );
        assert_eq!(
            QueueError::equality_not_set(Operation::Remove).to_string(),
            "cannot remove: equality comparer was not set"
        );
        assert_eq!(
            QueueError::equality_not_set(Operation::Contains).to_string(),
            "cannot execute contains: equality comparer was not set"
        );
    }

    #[test]
    fn accessors() {
        let err = QueueError::equality_not_set(Operation::Remove);
        assert_eq!(err.kind(), QueueErrorKind::EqualityNotSet);
        assert_eq!(err.operation(), Operation::Remove);
    }
}
