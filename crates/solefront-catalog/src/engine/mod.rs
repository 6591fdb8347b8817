//! Module: engine
//! Responsibility: the pagination engine — filter-context scoping, the
//! offset/cursor windowing decision, query issue, and cursor write-back.
//! Does not own: facet semantics (predicate), ordering (source), or cursor
//! persistence formats (cursor::codec).

mod page;

pub use page::{CatalogPage, Items};

use crate::{
    PAGE_SIZE,
    cursor::{Cursor, CursorStore},
    error::CatalogError,
    filter::{FilterSet, RawFilterParams, codec},
    obs::{self, MetricsEvent, WindowMode},
    order::SortMode,
    predicate,
    store::{ProductSource, QueryWindow},
};

///
/// PageRequest
///
/// One incoming listing request: filters, sort order, and the 1-based
/// page index. Lives only for the duration of the request.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageRequest {
    pub filters: FilterSet,
    pub sort: SortMode,
    pub page_index: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(filters: FilterSet, sort: SortMode, page_index: u32) -> Self {
        Self {
            filters,
            sort,
            page_index,
        }
    }

    /// Decode a request from flat string parameters as they arrive on the
    /// URL. A missing or malformed page parameter means page 1.
    #[must_use]
    pub fn from_params(
        raw: &RawFilterParams,
        sort: Option<&str>,
        page: Option<&str>,
    ) -> Self {
        Self {
            filters: codec::decode(raw),
            sort: SortMode::from_param(sort),
            page_index: page
                .and_then(|page| page.trim().parse().ok())
                .unwrap_or(1),
        }
    }

    /// Page indexes below 1 are served as page 1, never an error.
    #[must_use]
    pub const fn effective_page_index(&self) -> u32 {
        if self.page_index < 1 { 1 } else { self.page_index }
    }
}

///
/// PaginationEngine
///
/// Serves listing pages out of a product source, keeping forward cursors
/// in the injected store. Read-only against the source; the only side
/// effect of a request is the cursor write for the served page.
///

#[derive(Debug)]
pub struct PaginationEngine<S, C> {
    source: S,
    cursors: C,
}

impl<S, C> PaginationEngine<S, C>
where
    S: ProductSource,
    C: CursorStore,
{
    #[must_use]
    pub const fn new(source: S, cursors: C) -> Self {
        Self { source, cursors }
    }

    #[must_use]
    pub const fn cursors(&self) -> &C {
        &self.cursors
    }

    /// Consume the engine and return the cursor store for persistence.
    #[must_use]
    pub fn into_cursors(self) -> C {
        self.cursors
    }

    /// Serve one listing page.
    ///
    /// The result is the same whether the caller arrived by forward
    /// navigation (cursor continuation), deep link (offset fallback), or a
    /// filter change (scope reset, then offset fallback).
    pub fn fetch_page(&mut self, request: &PageRequest) -> Result<CatalogPage, CatalogError> {
        let page_index = request.effective_page_index();
        let signature = request.filters.signature();

        // Stale cursors from a different filter context must never
        // produce a page; discard them all before windowing.
        if self.cursors.scope() != Some(signature) {
            self.cursors.reset(signature);
            obs::record(MetricsEvent::ScopeReset);
        }

        let predicate = predicate::compile(&request.filters);
        let (window, mode) = self.select_window(request.sort, page_index);
        let items = self.source.window(&predicate, request.sort, &window)?;
        let total = self.source.count(&predicate)?;

        obs::record(MetricsEvent::PageServed {
            mode,
            rows: items.len() as u64,
        });

        let next_cursor = items
            .last()
            .map(|last| Cursor::new(request.sort.sort_value_of(last), last.id.clone()));
        if let Some(cursor) = &next_cursor {
            self.cursors.put(request.sort, page_index, cursor.clone());
        }

        Ok(CatalogPage::new(
            Items(items),
            request.sort,
            page_index,
            next_cursor,
            total,
        ))
    }

    /// Pick cursor continuation when the previous page's cursor exists for
    /// a cursor-capable order; otherwise fall back to an absolute offset
    /// window. Correctness over efficiency: the fallback is always valid.
    fn select_window(&self, sort: SortMode, page_index: u32) -> (QueryWindow, WindowMode) {
        if page_index > 1 && sort.uses_cursor() {
            match self.cursors.get(sort, page_index - 1) {
                // A price-ordered cursor without a sort value cannot be
                // positioned. A mangled but decodable session payload can
                // hand us one; treat it as missing and recompute by offset
                // rather than serving a wrong page.
                Some(cursor) if cursor.last_sort_value.is_some() => {
                    obs::record(MetricsEvent::CursorHit);
                    return (
                        QueryWindow::After {
                            cursor,
                            len: PAGE_SIZE,
                        },
                        WindowMode::Cursor,
                    );
                }
                _ => obs::record(MetricsEvent::CursorMiss),
            }
        }

        let start = (page_index as usize - 1) * PAGE_SIZE;
        (
            QueryWindow::Offset {
                start,
                len: PAGE_SIZE,
            },
            WindowMode::Offset,
        )
    }
}
