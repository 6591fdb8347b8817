//! Module: cursor
//! Responsibility: continuation cursor model, the per-session cursor table,
//! the storage trait injected into the engine, and the session payload codec.
//! Does not own: windowing decisions (engine) or filter identity derivation.

pub mod codec;
mod store;
mod table;

pub use store::{CursorStore, MemoryCursorStore, SessionCursorStore};
pub use table::CursorTable;

use crate::order::SortMode;
use serde::{Deserialize, Serialize};

///
/// Cursor
///
/// Position after the last item of one page under one sort mode:
/// the item's sort value (price; absent for popularity) plus its id as
/// the tie-break component. Forward pagination resumes strictly after
/// this key.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cursor {
    pub last_sort_value: Option<u32>,
    pub last_item_id: String,
}

impl Cursor {
    #[must_use]
    pub const fn new(last_sort_value: Option<u32>, last_item_id: String) -> Self {
        Self {
            last_sort_value,
            last_item_id,
        }
    }
}

///
/// CursorKey
///
/// Table key for one stored cursor: which sort order and which page the
/// cursor sits after. One table keyed this way replaces per-order
/// parallel arrays, so the orders cannot drift out of sync.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct CursorKey {
    pub sort: SortMode,
    pub page_index: u32,
}

impl CursorKey {
    #[must_use]
    pub const fn new(sort: SortMode, page_index: u32) -> Self {
        Self { sort, page_index }
    }
}
