//! Catalog core for the Solefront storefront: faceted filters, predicate
//! compilation, cursor-tracked pagination, and the product source boundary.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod cursor;
pub mod engine;
pub mod error;
pub mod filter;
pub mod obs;
pub mod order;
pub mod predicate;
pub mod product;
pub mod store;

///
/// CONSTANTS
///

/// Number of items per listing page.
///
/// Fixed by the storefront grid layout; both offset and cursor windowing
/// assume this width, so it is not request-configurable.
pub const PAGE_SIZE: usize = 12;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, codecs, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        cursor::Cursor,
        engine::{CatalogPage, PageRequest, PaginationEngine},
        filter::FilterSet,
        order::SortMode,
        product::{Item, ProductDoc, SizeValue},
    };
}
