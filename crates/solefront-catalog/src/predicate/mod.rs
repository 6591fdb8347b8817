//! Module: predicate
//!
//! Pure representation of compiled facet predicates. This layer contains
//! no parsing and no windowing; interpretation happens in later passes:
//!
//! - compilation from a [`FilterSet`](crate::filter::FilterSet)
//! - evaluation against product documents (in-memory source)

mod compile;
mod eval;

pub use compile::compile;

use crate::product::SizeValue;
use std::collections::BTreeSet;

///
/// Predicate
///
/// Compiled facet constraints, AND-combined. Opaque to the engine: it is
/// built once per request and handed to the product source unchanged, so
/// the three sort orders can never drift apart on filter semantics.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    /// Brand slug is one of the given set.
    BrandIn(BTreeSet<String>),
    /// Collection slug is one of the given set.
    CollectionIn(BTreeSet<String>),
    /// At least one size entry is in the set and not out of stock. An
    /// empty set matches nothing, by construction.
    SizeAvailable(BTreeSet<SizeValue>),
    PriceAtLeast(u32),
    PriceAtMost(u32),
}

impl Predicate {
    /// AND-combine clauses, collapsing the trivial cases.
    #[must_use]
    pub fn and(mut clauses: Vec<Self>) -> Self {
        clauses.retain(|clause| *clause != Self::True);
        if clauses.iter().any(|clause| *clause == Self::False) {
            return Self::False;
        }

        match clauses.len() {
            0 => Self::True,
            1 => clauses.remove(0),
            _ => Self::And(clauses),
        }
    }
}
