use crate::product::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// SortMode
///
/// Canonical listing order shared by query windowing, cursor keying, and
/// the product source. `Popularity` is the collection's natural insertion
/// order and paginates by offset only.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum SortMode {
    PriceAsc,
    PriceDesc,
    #[default]
    Popularity,
}

impl SortMode {
    /// Decode the flat `sort` request parameter. Anything other than the
    /// two price orders falls back to popularity, matching the listing
    /// default.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("asc") => Self::PriceAsc,
            Some("desc") => Self::PriceDesc,
            _ => Self::Popularity,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::PriceAsc => "asc",
            Self::PriceDesc => "desc",
            Self::Popularity => "popular",
        }
    }

    /// Whether this mode carries a sort value in its cursors and may window
    /// forward from a continuation boundary. Popularity cursors hold only
    /// the item id and the engine always windows it by offset.
    #[must_use]
    pub const fn uses_cursor(self) -> bool {
        matches!(self, Self::PriceAsc | Self::PriceDesc)
    }

    /// Cursor sort value for an item under this mode.
    #[must_use]
    pub const fn sort_value_of(self, item: &Item) -> Option<u32> {
        match self {
            Self::PriceAsc | Self::PriceDesc => Some(item.price),
            Self::Popularity => None,
        }
    }

    /// Total-order comparison of two `(price, id)` boundary keys under this
    /// mode. Ties on price always resolve by ascending item id so that page
    /// boundaries never skip or duplicate rows.
    ///
    /// `Popularity` has no boundary key ordering; callers must not compare
    /// boundaries for it.
    #[must_use]
    pub fn compare_keys(self, left: (u32, &str), right: (u32, &str)) -> Ordering {
        match self {
            Self::PriceAsc => left.0.cmp(&right.0).then_with(|| left.1.cmp(right.1)),
            Self::PriceDesc => right.0.cmp(&left.0).then_with(|| left.1.cmp(right.1)),
            Self::Popularity => {
                debug_assert!(false, "popularity order has no boundary keys");
                Ordering::Equal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_param_defaults_to_popularity() {
        assert_eq!(SortMode::from_param(Some("asc")), SortMode::PriceAsc);
        assert_eq!(SortMode::from_param(Some("desc")), SortMode::PriceDesc);
        assert_eq!(SortMode::from_param(Some("newest")), SortMode::Popularity);
        assert_eq!(SortMode::from_param(None), SortMode::Popularity);
    }

    #[test]
    fn price_ties_resolve_by_ascending_id_in_both_directions() {
        let asc = SortMode::PriceAsc;
        let desc = SortMode::PriceDesc;

        assert_eq!(asc.compare_keys((100, "a"), (100, "b")), Ordering::Less);
        assert_eq!(desc.compare_keys((100, "a"), (100, "b")), Ordering::Less);
        assert_eq!(asc.compare_keys((100, "a"), (200, "a")), Ordering::Less);
        assert_eq!(desc.compare_keys((100, "a"), (200, "a")), Ordering::Greater);
    }
}
