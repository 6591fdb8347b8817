//! Module: store
//! Responsibility: the product source boundary — windowed retrieval and
//! counting over an opaque document collection — plus the in-memory
//! reference implementation.
//! Does not own: cursor state or page-index arithmetic (engine).

mod memory;

pub use memory::MemoryCatalog;

use crate::{cursor::Cursor, order::SortMode, predicate::Predicate, product::Item};
use thiserror::Error as ThisError;

///
/// QueryWindow
///
/// Window bounds handed to the source along with predicate and sort.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryWindow {
    /// Absolute window over the full ordered result set, recomputed from
    /// scratch. The unconditional fallback for first pages and deep links.
    Offset { start: usize, len: usize },

    /// Continuation window: up to `len` items strictly after the cursor's
    /// `(sort value, item id)` boundary key in the requested order.
    After { cursor: Cursor, len: usize },
}

///
/// SourceError
///
/// Upstream collection failure. Fatal for the current request; this
/// subsystem performs no retries.
///

#[derive(Debug, ThisError)]
pub enum SourceError {
    #[error("document collection unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("document collection rejected the query: {reason}")]
    Rejected { reason: String },
}

///
/// ProductSource
///
/// Opaque queryable document collection: predicate filtering, ordering,
/// windowed retrieval, and counting. Read-only; the catalog never mutates
/// documents through this boundary.
///

pub trait ProductSource {
    /// Fetch one ordered window of item projections.
    fn window(
        &self,
        predicate: &Predicate,
        sort: SortMode,
        window: &QueryWindow,
    ) -> Result<Vec<Item>, SourceError>;

    /// Count all documents matching the predicate, ignoring windowing.
    fn count(&self, predicate: &Predicate) -> Result<u64, SourceError>;
}
