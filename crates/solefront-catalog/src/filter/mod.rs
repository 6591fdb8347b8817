//! Module: filter
//! Responsibility: structured facet filters, their flat-param codec, and the
//! canonical identity used to scope cursor state.
//! Does not own: predicate compilation or query execution.

pub mod codec;
pub mod identity;

pub use codec::RawFilterParams;
pub use identity::FilterSignature;

use crate::product::SizeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// FilterSet
///
/// Structured facet filters for one listing request. `None` on a facet
/// means "no constraint"; `Some` with an empty set means "matches nothing"
/// and the two must never be conflated.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterSet {
    pub brands: Option<BTreeSet<String>>,
    pub collections: Option<BTreeSet<String>>,
    pub sizes: Option<BTreeSet<SizeValue>>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
}

impl FilterSet {
    /// Filter set with no constraint on any facet.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            brands: None,
            collections: None,
            sizes: None,
            price_min: None,
            price_max: None,
        }
    }

    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.brands.is_none()
            && self.collections.is_none()
            && self.sizes.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }

    #[must_use]
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = Some(brands.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = Some(collections.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_sizes<I>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = SizeValue>,
    {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    #[must_use]
    pub const fn with_price_min(mut self, price_min: u32) -> Self {
        self.price_min = Some(price_min);
        self
    }

    #[must_use]
    pub const fn with_price_max(mut self, price_max: u32) -> Self {
        self.price_max = Some(price_max);
        self
    }
}
