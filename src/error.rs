//! Errors raised when a caller and the list state disagree.
//!
//! None of these are transient: each one means the caller asked for a row or a
//! transition that does not exist in the current state, so they are reported
//! straight back and never retried. Every operation checks its inputs before it
//! touches the tree, so an error always leaves the list exactly as it was.

use crate::tree::NodeState;

/// Which index space an out-of-range index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Position in the visible flat list.
    Row,
    /// Index of a parent section in the tree.
    Parent,
    /// Index of a child within its parent.
    Child,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Row => "row",
            Self::Parent => "parent",
            Self::Child => "child",
        };
        f.write_str(name)
    }
}

/// Error type for index lookups and expand/collapse transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The index is outside `[0, len)` for its index space.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Index space the bad index was given in.
        kind: IndexKind,
        /// The offending index.
        index: usize,
        /// Number of valid indices at the time of the call.
        len: usize,
    },

    /// The parent is not in a state that allows the requested transition.
    #[error("parent {parent} cannot change state from {from:?}")]
    InvalidTransition {
        /// Parent the transition was requested for.
        parent: usize,
        /// State the parent was in when the request arrived.
        from: NodeState,
    },

    /// The flat row given for a transition is not where the parent's header is.
    #[error("parent {parent} has its header at row {actual}, not row {given}")]
    PositionMismatch {
        /// Parent the transition was requested for.
        parent: usize,
        /// Row the caller supplied.
        given: usize,
        /// Row the parent header actually occupies.
        actual: usize,
    },
}

impl ListError {
    /// Creates an out-of-range error for a flat row.
    #[must_use]
    pub fn row(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            kind: IndexKind::Row,
            index,
            len,
        }
    }

    /// Creates an out-of-range error for a parent index.
    #[must_use]
    pub fn parent(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            kind: IndexKind::Parent,
            index,
            len,
        }
    }

    /// Creates an out-of-range error for a child index.
    #[must_use]
    pub fn child(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            kind: IndexKind::Child,
            index,
            len,
        }
    }
}
