use crate::{filter::FilterSet, predicate::Predicate};

/// Compile a filter set into a single AND-combined predicate.
///
/// Each facet contributes exactly one clause when set and nothing when
/// unset, so adding an unset facet can never change a result. This is the
/// one place facet inclusion rules live; every sort order queries through
/// the same compiled predicate.
#[must_use]
pub fn compile(filters: &FilterSet) -> Predicate {
    let mut clauses = Vec::with_capacity(5);

    if let Some(brands) = &filters.brands {
        clauses.push(Predicate::BrandIn(brands.clone()));
    }
    if let Some(collections) = &filters.collections {
        clauses.push(Predicate::CollectionIn(collections.clone()));
    }
    if let Some(sizes) = &filters.sizes {
        // Some(empty) stays a SizeAvailable clause: it evaluates to false
        // for every document, which is the contract for an all-garbage
        // size list ("filtered by size, matched nothing").
        clauses.push(Predicate::SizeAvailable(sizes.clone()));
    }
    if let Some(price_min) = filters.price_min {
        clauses.push(Predicate::PriceAtLeast(price_min));
    }
    if let Some(price_max) = filters.price_max {
        clauses.push(Predicate::PriceAtMost(price_max));
    }

    Predicate::and(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::SizeValue;
    use std::collections::BTreeSet;

    #[test]
    fn unconstrained_filters_compile_to_true() {
        assert_eq!(compile(&FilterSet::unconstrained()), Predicate::True);
    }

    #[test]
    fn single_facet_compiles_without_an_and_wrapper() {
        let filters = FilterSet::unconstrained().with_price_min(100);
        assert_eq!(compile(&filters), Predicate::PriceAtLeast(100));
    }

    #[test]
    fn empty_size_set_compiles_to_a_match_nothing_clause() {
        let filters = FilterSet::unconstrained().with_sizes([]);
        assert_eq!(
            compile(&filters),
            Predicate::SizeAvailable(BTreeSet::new())
        );
    }

    #[test]
    fn all_set_facets_contribute_one_clause_each() {
        let filters = FilterSet::unconstrained()
            .with_brands(["nike"])
            .with_collections(["jordan"])
            .with_sizes([SizeValue::from_tenths(80)])
            .with_price_min(100)
            .with_price_max(900);

        let Predicate::And(clauses) = compile(&filters) else {
            panic!("expected an AND predicate");
        };
        assert_eq!(clauses.len(), 5);
    }
}
