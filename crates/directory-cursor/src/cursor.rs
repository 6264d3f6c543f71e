use thiserror::Error;

use crate::types::{IndexEntry, ParentIdAndRdn};

/// Errors raised by a cursor over the directory's hierarchical index. Never maps onto a Kerberos
/// error code; this is a separate taxonomy entirely.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("operation unsupported by a one-level children cursor")]
    Unsupported,
    #[error("cursor is closed")]
    Closed,
    #[error("no prefetched entry available; call next/previous/first before get")]
    NotAvailable,
    #[error("underlying index cursor error: {0}")]
    Inner(String),
}

/// A caller-positioned cursor over the ordered `(ParentIdAndRdn<ID>) -> ID` index. Implementations
/// back this with whatever on-disk or in-memory ordered structure the store uses; this crate only
/// consumes it.
pub trait IndexCursor<ID> {
    /// Advances one position and returns the entry now under the cursor, or `None` if the index
    /// is exhausted in the forward direction.
    fn next(&mut self) -> Result<Option<IndexEntry<ParentIdAndRdn<ID>, ID>>, CursorError>;

    /// Symmetric with [`IndexCursor::next`], moving backward.
    fn previous(&mut self) -> Result<Option<IndexEntry<ParentIdAndRdn<ID>, ID>>, CursorError>;

    /// Returns the entry the cursor is currently positioned on, if any.
    fn get(&self) -> Result<IndexEntry<ParentIdAndRdn<ID>, ID>, CursorError>;

    /// Releases any read transaction the cursor holds. Idempotent. `cause` optionally describes
    /// why the closure is happening (an upstream error, request cancellation, …) for the
    /// underlying cursor's own diagnostics.
    fn close(&mut self, cause: Option<&str>) -> Result<(), CursorError>;
}
