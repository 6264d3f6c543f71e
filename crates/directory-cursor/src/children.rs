use crate::cursor::{CursorError, IndexCursor};
use crate::types::ForwardIndexEntry;

/// Tracks where a [`ChildrenCursor`] stands relative to its target's children, independently per
/// direction: once a direction reports exhaustion it stays exhausted until `before_first`/`first`
/// resets the whole cursor, even if the other direction is then walked.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Position<ID> {
    BeforeFirst,
    On(ForwardIndexEntry<ID>),
    ExhaustedForward,
    ExhaustedBackward,
}

/// Wraps a caller-positioned [`IndexCursor`] and streams only the entries whose `parentId`
/// component equals `target`, in the underlying index's natural order.
///
/// The caller must have already positioned `inner` at the greatest-lower-bound of
/// `(target, ⊥)`; this wrapper never seeks the underlying cursor itself, it only walks
/// `next`/`previous` from wherever the caller left it.
pub struct ChildrenCursor<ID, C: IndexCursor<ID>> {
    inner: C,
    target: ID,
    position: Position<ID>,
    closed: bool,
}

impl<ID, C> ChildrenCursor<ID, C>
where
    ID: Clone + PartialEq,
    C: IndexCursor<ID>,
{
    /// `inner` must already be positioned at the greatest-lower-bound of `(target, ⊥)`.
    pub fn new(inner: C, target: ID) -> Self {
        tracing::debug!("children cursor opened");
        Self {
            inner,
            target,
            position: Position::BeforeFirst,
            closed: false,
        }
    }

    fn ensure_open(&self) -> Result<(), CursorError> {
        if self.closed {
            Err(CursorError::Closed)
        } else {
            Ok(())
        }
    }

    /// Advances the underlying cursor and returns the matching entry, or `None` once it's
    /// exhausted or has walked past the target's children.
    pub fn next(&mut self) -> Result<bool, CursorError> {
        self.ensure_open()?;

        if matches!(self.position, Position::ExhaustedForward) {
            return Ok(false);
        }

        match self.inner.next()? {
            Some(entry) if entry.key.parent_id == self.target => {
                let forward = ForwardIndexEntry {
                    key: self.target.clone(),
                    id: entry.id,
                };
                self.position = Position::On(forward);
                Ok(true)
            }
            _ => {
                self.position = Position::ExhaustedForward;
                Ok(false)
            }
        }
    }

    /// Symmetric with [`ChildrenCursor::next`], moving backward.
    pub fn previous(&mut self) -> Result<bool, CursorError> {
        self.ensure_open()?;

        if matches!(self.position, Position::ExhaustedBackward) {
            return Ok(false);
        }

        match self.inner.previous()? {
            Some(entry) if entry.key.parent_id == self.target => {
                let forward = ForwardIndexEntry {
                    key: self.target.clone(),
                    id: entry.id,
                };
                self.position = Position::On(forward);
                Ok(true)
            }
            _ => {
                self.position = Position::ExhaustedBackward;
                Ok(false)
            }
        }
    }

    /// Resets the cursor so the next call to `next` returns the first matching child again.
    pub fn before_first(&mut self) -> Result<(), CursorError> {
        self.ensure_open()?;
        self.position = Position::BeforeFirst;
        Ok(())
    }

    /// Equivalent to `before_first` followed by `next`.
    pub fn first(&mut self) -> Result<bool, CursorError> {
        self.before_first()?;
        self.next()
    }

    /// `last`/`after_last` have no meaningful definition for a prefix-bounded forward cursor.
    pub fn last(&mut self) -> Result<bool, CursorError> {
        self.ensure_open()?;
        Err(CursorError::Unsupported)
    }

    /// See [`ChildrenCursor::last`].
    pub fn after_last(&mut self) -> Result<(), CursorError> {
        self.ensure_open()?;
        Err(CursorError::Unsupported)
    }

    /// Returns the entry the cursor is currently positioned on. The caller must have observed a
    /// `true` return from `next`/`previous` since the last reset.
    pub fn get(&self) -> Result<ForwardIndexEntry<ID>, CursorError> {
        self.ensure_open()?;
        match &self.position {
            Position::On(entry) => Ok(entry.clone()),
            _ => Err(CursorError::NotAvailable),
        }
    }

    /// Idempotent. Closes the underlying cursor, releasing any read transaction it holds.
    pub fn close(&mut self, cause: Option<&str>) -> Result<(), CursorError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        tracing::debug!(cause = ?cause, "children cursor closed");
        self.inner.close(cause)
    }
}
