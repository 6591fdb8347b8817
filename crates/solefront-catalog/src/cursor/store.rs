use crate::{
    cursor::{Cursor, CursorTable, codec},
    filter::FilterSignature,
    order::SortMode,
};

///
/// CursorStore
///
/// Storage boundary for per-session cursor state, injected into the
/// pagination engine so it stays testable without a real session
/// transport. Implementations persist whole tables; the engine only ever
/// reads its current scope and writes one cursor per served page.
///

pub trait CursorStore {
    /// Filter context the stored cursors were built under, if any.
    fn scope(&self) -> Option<FilterSignature>;

    fn get(&self, sort: SortMode, page_index: u32) -> Option<Cursor>;

    fn put(&mut self, sort: SortMode, page_index: u32, cursor: Cursor);

    /// Discard all cursors and bind the store to a new filter context.
    /// Invoked by the engine whenever the incoming request's filter
    /// signature differs from `scope()`.
    fn reset(&mut self, scope: FilterSignature);
}

///
/// MemoryCursorStore
///
/// In-process store over a [`CursorTable`]. The session-backed deployment
/// wraps the same table through [`codec`](crate::cursor::codec); this one
/// backs unit tests and single-process embedding.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryCursorStore {
    table: CursorTable,
}

impl MemoryCursorStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: CursorTable::new(),
        }
    }

    #[must_use]
    pub const fn from_table(table: CursorTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &CursorTable {
        &self.table
    }

    #[must_use]
    pub fn into_table(self) -> CursorTable {
        self.table
    }
}

impl CursorStore for MemoryCursorStore {
    fn scope(&self) -> Option<FilterSignature> {
        self.table.scope()
    }

    fn get(&self, sort: SortMode, page_index: u32) -> Option<Cursor> {
        self.table.get(sort, page_index).cloned()
    }

    fn put(&mut self, sort: SortMode, page_index: u32, cursor: Cursor) {
        self.table.put(sort, page_index, cursor);
    }

    fn reset(&mut self, scope: FilterSignature) {
        self.table.rescope(scope);
    }
}

///
/// SessionCursorStore
///
/// Cursor store hydrated from a client-held session payload string and
/// drained back into one at the end of the request. Decoding is
/// permissive (any stale or mangled payload starts an empty table);
/// encoding failures surface to the caller.
///

#[derive(Clone, Debug, Default)]
pub struct SessionCursorStore {
    table: CursorTable,
}

impl SessionCursorStore {
    /// Hydrate from the raw payload string, if the client sent one.
    #[must_use]
    pub fn from_payload(raw: Option<&str>) -> Self {
        Self {
            table: codec::decode_table_or_empty(raw),
        }
    }

    /// Serialize the table back into the payload the client stores.
    pub fn into_payload(self) -> Result<String, codec::CursorCodecError> {
        codec::encode_table(&self.table)
    }
}

impl CursorStore for SessionCursorStore {
    fn scope(&self) -> Option<FilterSignature> {
        self.table.scope()
    }

    fn get(&self, sort: SortMode, page_index: u32) -> Option<Cursor> {
        self.table.get(sort, page_index).cloned()
    }

    fn put(&mut self, sort: SortMode, page_index: u32, cursor: Cursor) {
        self.table.put(sort, page_index, cursor);
    }

    fn reset(&mut self, scope: FilterSignature) {
        self.table.rescope(scope);
    }
}
