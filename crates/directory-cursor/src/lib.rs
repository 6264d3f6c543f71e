//! A one-level children cursor: given an ordered index of `(parentId, rdn) -> entryId` and a
//! target `parentId`, streams every entry whose key's `parentId` component equals the target, in
//! the index's natural order, with bidirectional navigation and a small, well-defined lifecycle.

mod children;
mod cursor;
mod types;

pub use children::ChildrenCursor;
pub use cursor::{CursorError, IndexCursor};
pub use types::{ForwardIndexEntry, IndexEntry, ParentIdAndRdn};
