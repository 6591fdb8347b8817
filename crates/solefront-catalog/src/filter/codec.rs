//! Module: filter::codec
//! Responsibility: translate flat string request parameters to and from
//! [`FilterSet`]. Decoding is permissive by contract: malformed numeric
//! tokens are dropped silently, never surfaced as errors.
//! Does not own: identity/signature derivation or predicate semantics.

use crate::{filter::FilterSet, product::SizeValue};
use std::collections::BTreeSet;

///
/// RawFilterParams
///
/// Flat request-parameter form of a filter set: comma-separated facet
/// lists and decimal price strings, exactly as they arrive on the URL.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawFilterParams {
    pub brands: Option<String>,
    pub collections: Option<String>,
    pub sizes: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Decode flat request parameters into a structured filter set.
///
/// Absent or blank raw values decode to "unset". A present size list whose
/// tokens are all non-numeric decodes to `Some(empty)`: the user did filter
/// by size, the filter just matches nothing.
#[must_use]
pub fn decode(raw: &RawFilterParams) -> FilterSet {
    FilterSet {
        brands: decode_slug_list(raw.brands.as_deref()),
        collections: decode_slug_list(raw.collections.as_deref()),
        sizes: decode_size_list(raw.sizes.as_deref()),
        price_min: raw.min_price.as_deref().and_then(parse_price),
        price_max: raw.max_price.as_deref().and_then(parse_price),
    }
}

/// Encode a filter set back to flat request parameters. Set-valued facets
/// serialize in canonical (sorted) order. A present-but-empty size set has
/// no flat representation and encodes as an empty string, which decodes
/// back to unset.
#[must_use]
pub fn encode(filters: &FilterSet) -> RawFilterParams {
    RawFilterParams {
        brands: filters.brands.as_ref().map(join_slugs),
        collections: filters.collections.as_ref().map(join_slugs),
        sizes: filters.sizes.as_ref().map(|sizes| {
            sizes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }),
        min_price: filters.price_min.map(|price| price.to_string()),
        max_price: filters.price_max.map(|price| price.to_string()),
    }
}

fn decode_slug_list(raw: Option<&str>) -> Option<BTreeSet<String>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
            .collect(),
    )
}

fn decode_size_list(raw: Option<&str>) -> Option<BTreeSet<SizeValue>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    // Non-numeric tokens drop out here; an all-garbage list still yields
    // Some(empty), which compiles to a match-nothing facet clause.
    Some(raw.split(',').filter_map(SizeValue::parse).collect())
}

/// Parse a price token the way the listing always has: leading decimal
/// digits, anything after them ignored. A token with no leading digits is
/// treated as unset rather than as an empty constraint.
fn parse_price(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn join_slugs(slugs: &BTreeSet<String>) -> String {
    slugs.iter().cloned().collect::<Vec<_>>().join(",")
}
