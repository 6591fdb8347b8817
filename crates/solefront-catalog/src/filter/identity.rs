//! Module: filter::identity
//! Responsibility: canonical, order-independent identity of a filter set.
//! Cursor state is only valid for the filter context it was built under;
//! this identity is how the engine detects that the context changed.
//! Does not own: filter decoding or cursor storage.

use crate::{filter::FilterSet, product::SizeValue};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

// Facet tags for the signature hash stream. Unset facets hash a distinct
// marker so that "unset" and "empty set" can never collide.
const TAG_BRANDS: u8 = 0x01;
const TAG_COLLECTIONS: u8 = 0x02;
const TAG_SIZES: u8 = 0x03;
const TAG_PRICE_MIN: u8 = 0x04;
const TAG_PRICE_MAX: u8 = 0x05;
const TAG_UNSET: u8 = 0x00;
const TAG_SET: u8 = 0x11;

///
/// FilterSignature
///
/// Stable, deterministic hash of a filter set's canonical identity.
/// Set-equal filter sets produce the same signature regardless of the
/// order facet values arrived in.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct FilterSignature([u8; 32]);

impl FilterSignature {
    #[must_use]
    pub fn of(filters: &FilterSet) -> Self {
        let mut hasher = Sha256::new();

        hash_slug_facet(&mut hasher, TAG_BRANDS, filters.brands.as_ref());
        hash_slug_facet(&mut hasher, TAG_COLLECTIONS, filters.collections.as_ref());
        hash_size_facet(&mut hasher, filters.sizes.as_ref());
        hash_price_bound(&mut hasher, TAG_PRICE_MIN, filters.price_min);
        hash_price_bound(&mut hasher, TAG_PRICE_MAX, filters.price_max);

        Self(hasher.finalize().into())
    }

    /// Test fixture constructor; production signatures always come from
    /// [`FilterSignature::of`].
    #[cfg(test)]
    pub(crate) const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::with_capacity(64);
        for byte in self.0 {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl std::fmt::Display for FilterSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl FilterSet {
    /// Canonical identity string for this filter set: order-independent,
    /// with unset facets rendered as `*` and empty sets as nothing, so the
    /// two remain distinguishable.
    ///
    /// Facet values are not escaped, so a literal `*` slug renders the
    /// same as an unset facet. This string is for display and logging;
    /// cursor scoping uses [`FilterSet::signature`], which hashes unset
    /// and set facets under distinct tags and has no such collision.
    #[must_use]
    pub fn identity(&self) -> String {
        format!(
            "b={};c={};s={};p={}..{}",
            facet_text(self.brands.as_ref(), |slug| slug.clone()),
            facet_text(self.collections.as_ref(), |slug| slug.clone()),
            facet_text(self.sizes.as_ref(), ToString::to_string),
            bound_text(self.price_min),
            bound_text(self.price_max),
        )
    }

    /// Signature over the same canonical identity, fixed-width for storage
    /// alongside persisted cursor state.
    #[must_use]
    pub fn signature(&self) -> FilterSignature {
        FilterSignature::of(self)
    }
}

fn facet_text<T: Ord>(facet: Option<&BTreeSet<T>>, render: impl Fn(&T) -> String) -> String {
    facet.map_or_else(
        || "*".to_string(),
        |values| values.iter().map(render).collect::<Vec<_>>().join(","),
    )
}

fn bound_text(bound: Option<u32>) -> String {
    bound.map_or_else(|| "*".to_string(), |value| value.to_string())
}

fn hash_slug_facet(hasher: &mut Sha256, tag: u8, facet: Option<&BTreeSet<String>>) {
    hasher.update([tag]);
    let Some(values) = facet else {
        hasher.update([TAG_UNSET]);
        return;
    };

    hasher.update([TAG_SET]);
    write_len(hasher, values.len());
    for value in values {
        write_len(hasher, value.len());
        hasher.update(value.as_bytes());
    }
}

fn hash_size_facet(hasher: &mut Sha256, facet: Option<&BTreeSet<SizeValue>>) {
    hasher.update([TAG_SIZES]);
    let Some(values) = facet else {
        hasher.update([TAG_UNSET]);
        return;
    };

    hasher.update([TAG_SET]);
    write_len(hasher, values.len());
    for value in values {
        hasher.update(value.tenths().to_be_bytes());
    }
}

fn hash_price_bound(hasher: &mut Sha256, tag: u8, bound: Option<u32>) {
    hasher.update([tag]);
    match bound {
        None => hasher.update([TAG_UNSET]),
        Some(value) => {
            hasher.update([TAG_SET]);
            hasher.update(value.to_be_bytes());
        }
    }
}

fn write_len(hasher: &mut Sha256, len: usize) {
    hasher.update(u32::try_from(len).unwrap_or(u32::MAX).to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::codec::{RawFilterParams, decode};

    #[test]
    fn identity_is_order_independent() {
        let a = FilterSet::unconstrained().with_brands(["nike", "adidas"]);
        let b = FilterSet::unconstrained().with_brands(["adidas", "nike"]);

        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn unset_and_empty_facets_are_distinct() {
        let unset = FilterSet::unconstrained();
        let empty = FilterSet::unconstrained().with_sizes([]);

        assert_ne!(unset.identity(), empty.identity());
        assert_ne!(unset.signature(), empty.signature());
    }

    #[test]
    fn signature_tracks_every_facet() {
        let base = FilterSet::unconstrained().with_brands(["nike"]);
        let variants = [
            base.clone().with_brands(["adidas"]),
            base.clone().with_collections(["jordan"]),
            base.clone().with_sizes([crate::product::SizeValue::from_tenths(80)]),
            base.clone().with_price_min(100),
            base.clone().with_price_max(900),
        ];

        for variant in variants {
            assert_ne!(base.signature(), variant.signature(), "{}", variant.identity());
        }
    }

    #[test]
    fn literal_star_slug_still_signs_distinctly_from_unset() {
        let starred = FilterSet::unconstrained().with_brands(["*"]);
        let unset = FilterSet::unconstrained();

        // The display string collides (documented); the signature that
        // scopes cursor state must not.
        assert_eq!(starred.identity(), unset.identity());
        assert_ne!(starred.signature(), unset.signature());
    }

    #[test]
    fn decoded_param_order_does_not_change_the_signature() {
        let a = decode(&RawFilterParams {
            brands: Some("nike,adidas".to_string()),
            sizes: Some("9.5,8".to_string()),
            ..RawFilterParams::default()
        });
        let b = decode(&RawFilterParams {
            brands: Some("adidas,nike".to_string()),
            sizes: Some("8,9.5".to_string()),
            ..RawFilterParams::default()
        });

        assert_eq!(a.signature(), b.signature());
    }
}
