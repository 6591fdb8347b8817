use crate::{predicate::Predicate, product::ProductDoc};

impl Predicate {
    /// Evaluate this predicate against one product document.
    ///
    /// Used by the in-memory source; a remote document store would compile
    /// the same AST into its own query language instead.
    #[must_use]
    pub fn matches(&self, doc: &ProductDoc) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::And(clauses) => clauses.iter().all(|clause| clause.matches(doc)),
            Self::BrandIn(brands) => brands.contains(&doc.brand_slug),
            Self::CollectionIn(collections) => collections.contains(&doc.collection_slug),
            Self::SizeAvailable(sizes) => doc.has_available_size(sizes),
            Self::PriceAtLeast(price_min) => doc.price >= *price_min,
            Self::PriceAtMost(price_max) => doc.price <= *price_max,
        }
    }
}
