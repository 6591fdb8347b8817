use serde::{Deserialize, Serialize};
use std::fmt;

///
/// SizeValue
///
/// Shoe size in tenths (8.5 is stored as 85). Keeps size keys exactly
/// ordered and hashable; float sizes never enter the domain model.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct SizeValue(u16);

impl SizeValue {
    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// Parse a raw size token ("8", "8.5"). Returns `None` for anything
    /// that is not a whole or half-step decimal size; callers drop such
    /// tokens silently.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let (whole, frac) = match token.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (token, None),
        };
        let whole: u16 = whole.parse().ok()?;
        let tenth: u16 = match frac {
            None | Some("") => 0,
            Some(frac) if frac.len() == 1 => frac.parse().ok()?,
            Some(_) => return None,
        };

        whole
            .checked_mul(10)
            .and_then(|scaled| scaled.checked_add(tenth))
            .map(Self)
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_multiple_of(10) {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

///
/// SizeEntry
///
/// One size row on a product document. An out-of-stock entry never
/// satisfies a size filter, even when the numeric size matches.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SizeEntry {
    pub size: SizeValue,
    pub out_of_stock: bool,
}

impl SizeEntry {
    #[must_use]
    pub const fn in_stock(size: SizeValue) -> Self {
        Self {
            size,
            out_of_stock: false,
        }
    }

    #[must_use]
    pub const fn sold_out(size: SizeValue) -> Self {
        Self {
            size,
            out_of_stock: true,
        }
    }
}

///
/// ProductDoc
///
/// Full product document as held by the document collection. The catalog
/// subsystem only ever reads these; projection to [`Item`] happens at the
/// source boundary.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProductDoc {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Price in whole currency units.
    pub price: u32,
    pub brand_slug: String,
    pub brand_name: String,
    pub collection_slug: String,
    pub sizes: Vec<SizeEntry>,
    pub image_refs: Vec<String>,
}

impl ProductDoc {
    /// True when at least one entry in `sizes` is purchasable at a size in
    /// the given set.
    #[must_use]
    pub fn has_available_size(&self, wanted: &std::collections::BTreeSet<SizeValue>) -> bool {
        self.sizes
            .iter()
            .any(|entry| !entry.out_of_stock && wanted.contains(&entry.size))
    }
}

///
/// Item
///
/// Read-only listing projection of a product document: exactly the fields
/// the product card renders. Never mutated by this subsystem.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub price: u32,
    pub brand_name: String,
    /// First image asset reference, when the document carries any.
    pub image_ref: Option<String>,
}

impl Item {
    /// Project a listing item out of a full product document.
    #[must_use]
    pub fn project(doc: &ProductDoc) -> Self {
        Self {
            id: doc.id.clone(),
            slug: doc.slug.clone(),
            name: doc.name.clone(),
            price: doc.price,
            brand_name: doc.brand_name.clone(),
            image_ref: doc.image_refs.first().cloned(),
        }
    }
}
