use thiserror::Error;

use crate::domain::DisplayTicket;

/// Reasons a paging operation left the state untouched.
///
/// The default controller API swallows these; the `try_*` variants surface
/// them to callers that want to tell an invalid request from a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("index {index} is out of bounds for {len} pages")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cannot insert at {index}; valid positions are 0..={len}")]
    InsertOutOfBounds { index: usize, len: usize },
    #[error("page is not part of the sequence")]
    PageNotFound,
    #[error("already displaying index {index}")]
    AlreadyAtIndex { index: usize },
    #[error("already at the first page")]
    AtFirstPage,
    #[error("page sequence is empty")]
    EmptySequence,
    #[error("display ticket {ticket} is not in flight")]
    UnknownTicket { ticket: DisplayTicket },
    #[error("paging command queue is full")]
    QueueFull,
    #[error("paging command loop has shut down")]
    Disconnected,
}

impl PagingError {
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        if len == 0 {
            Self::EmptySequence
        } else {
            Self::IndexOutOfBounds { index, len }
        }
    }
}
