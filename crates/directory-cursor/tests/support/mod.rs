//! An in-memory [`IndexCursor`] backed by a sorted `Vec`, standing in for whatever on-disk B-tree
//! cursor a real directory store would hand to [`directory_cursor::ChildrenCursor`].

use directory_cursor::{CursorError, IndexCursor, IndexEntry, ParentIdAndRdn};

pub struct VecCursor {
    entries: Vec<IndexEntry<ParentIdAndRdn<u64>, u64>>,
    /// `None` means positioned before the first entry; `Some(len)` means positioned past the last.
    pos: Option<usize>,
    closed: bool,
}

impl VecCursor {
    /// Builds a cursor over `entries` (which must already be sorted by `(parent_id, rdn)`),
    /// positioned at the greatest-lower-bound of `(target, "")` the way a real caller is required
    /// to position the underlying index cursor before handing it to `ChildrenCursor::new`.
    pub fn positioned_at_glb(mut entries: Vec<IndexEntry<ParentIdAndRdn<u64>, u64>>, target: u64) -> Self {
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        let first_at_or_after = entries.partition_point(|e| e.key < ParentIdAndRdn::new(target, ""));
        Self {
            entries,
            pos: first_at_or_after.checked_sub(1),
            closed: false,
        }
    }
}

impl IndexCursor<u64> for VecCursor {
    fn next(&mut self) -> Result<Option<IndexEntry<ParentIdAndRdn<u64>, u64>>, CursorError> {
        if self.closed {
            return Err(CursorError::Closed);
        }
        let next_pos = self.pos.map_or(0, |p| p + 1);
        if next_pos >= self.entries.len() {
            self.pos = Some(self.entries.len());
            return Ok(None);
        }
        self.pos = Some(next_pos);
        Ok(Some(self.entries[next_pos].clone()))
    }

    fn previous(&mut self) -> Result<Option<IndexEntry<ParentIdAndRdn<u64>, u64>>, CursorError> {
        if self.closed {
            return Err(CursorError::Closed);
        }
        match self.pos {
            None | Some(0) => {
                self.pos = None;
                Ok(None)
            }
            Some(p) => {
                let prev_pos = p - 1;
                self.pos = Some(prev_pos);
                Ok(Some(self.entries[prev_pos].clone()))
            }
        }
    }

    fn get(&self) -> Result<IndexEntry<ParentIdAndRdn<u64>, u64>, CursorError> {
        if self.closed {
            return Err(CursorError::Closed);
        }
        match self.pos {
            Some(p) if p < self.entries.len() => Ok(self.entries[p].clone()),
            _ => Err(CursorError::NotAvailable),
        }
    }

    fn close(&mut self, _cause: Option<&str>) -> Result<(), CursorError> {
        self.closed = true;
        Ok(())
    }
}
