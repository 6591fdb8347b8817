//! Module: engine::page
//! Responsibility: the page response payload handed to presentation.
//! Does not own: windowing decisions or cursor persistence.

use crate::{PAGE_SIZE, cursor::Cursor, order::SortMode, product::Item};
use derive_more::{Deref, IntoIterator};

///
/// Items
///
/// Ordered item sequence of one served page.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct Items(#[into_iterator(owned, ref)] pub Vec<Item>);

impl Items {
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0.len() as u64
    }
}

///
/// CatalogPage
///
/// One served listing page: the items, the order and page index they were
/// served under, the continuation cursor after the last item (when the
/// page was non-empty), and the filtered total for the page indicator.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogPage {
    items: Items,
    sort: SortMode,
    page_index: u32,
    next_cursor: Option<Cursor>,
    total: u64,
}

impl CatalogPage {
    #[must_use]
    pub const fn new(
        items: Items,
        sort: SortMode,
        page_index: u32,
        next_cursor: Option<Cursor>,
        total: u64,
    ) -> Self {
        Self {
            items,
            sort,
            page_index,
            next_cursor,
            total,
        }
    }

    #[must_use]
    pub const fn items(&self) -> &Items {
        &self.items
    }

    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    #[must_use]
    pub const fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Filtered product count across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages the filtered result spans.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total.div_ceil(PAGE_SIZE as u64)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.0.is_empty()
    }

    /// Consume this page and return `(items, next_cursor)`.
    #[must_use]
    pub fn into_parts(self) -> (Items, Option<Cursor>) {
        (self.items, self.next_cursor)
    }
}
