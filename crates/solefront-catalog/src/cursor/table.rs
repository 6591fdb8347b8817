use crate::{
    cursor::{Cursor, CursorKey},
    filter::FilterSignature,
    order::SortMode,
};
use std::collections::BTreeMap;

///
/// CursorTable
///
/// Flat `(sort, page) -> cursor` mapping plus the filter signature it was
/// populated under. A table is only meaningful for that one filter
/// context; rescoping clears every entry. Bounded by the number of pages
/// visited in a session, so no eviction policy is needed.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CursorTable {
    scope: Option<FilterSignature>,
    entries: BTreeMap<CursorKey, Cursor>,
}

impl CursorTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scope: None,
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn scoped(scope: FilterSignature) -> Self {
        Self {
            scope: Some(scope),
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn scope(&self) -> Option<FilterSignature> {
        self.scope
    }

    #[must_use]
    pub fn get(&self, sort: SortMode, page_index: u32) -> Option<&Cursor> {
        self.entries.get(&CursorKey::new(sort, page_index))
    }

    /// Last write wins for a given key; rapid same-page navigation within
    /// one session needs no stronger guarantee since every cursor is
    /// recomputable through the offset fallback.
    pub fn put(&mut self, sort: SortMode, page_index: u32, cursor: Cursor) {
        self.entries.insert(CursorKey::new(sort, page_index), cursor);
    }

    /// Drop every entry and bind the table to a new filter context.
    pub fn rescope(&mut self, scope: FilterSignature) {
        self.entries.clear();
        self.scope = Some(scope);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scope = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&CursorKey, &Cursor)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_a() -> FilterSignature {
        FilterSignature::from_bytes([0x0a; 32])
    }

    fn scope_b() -> FilterSignature {
        FilterSignature::from_bytes([0x0b; 32])
    }

    #[test]
    fn entries_are_keyed_per_sort_mode() {
        let mut table = CursorTable::scoped(scope_a());
        table.put(SortMode::PriceAsc, 1, Cursor::new(Some(100), "a".to_string()));
        table.put(SortMode::PriceDesc, 1, Cursor::new(Some(900), "z".to_string()));

        assert_eq!(
            table.get(SortMode::PriceAsc, 1),
            Some(&Cursor::new(Some(100), "a".to_string()))
        );
        assert_eq!(
            table.get(SortMode::PriceDesc, 1),
            Some(&Cursor::new(Some(900), "z".to_string()))
        );
        assert_eq!(table.get(SortMode::Popularity, 1), None);
    }

    #[test]
    fn put_overwrites_with_the_last_write() {
        let mut table = CursorTable::scoped(scope_a());
        table.put(SortMode::PriceAsc, 2, Cursor::new(Some(100), "a".to_string()));
        table.put(SortMode::PriceAsc, 2, Cursor::new(Some(110), "b".to_string()));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(SortMode::PriceAsc, 2),
            Some(&Cursor::new(Some(110), "b".to_string()))
        );
    }

    #[test]
    fn rescope_drops_all_entries() {
        let mut table = CursorTable::scoped(scope_a());
        table.put(SortMode::PriceAsc, 1, Cursor::new(Some(100), "a".to_string()));
        table.put(SortMode::Popularity, 3, Cursor::new(None, "m".to_string()));

        table.rescope(scope_b());

        assert!(table.is_empty());
        assert_eq!(table.scope(), Some(scope_b()));
    }
}
