use crate::{
    cursor::Cursor,
    order::SortMode,
    predicate::Predicate,
    product::{Item, ProductDoc},
    store::{ProductSource, QueryWindow, SourceError},
};
use std::cmp::Ordering;

///
/// MemoryCatalog
///
/// In-process product collection. Document insertion order is the
/// "popular" natural order; price orders are total orders with item id as
/// the tie break, so window boundaries can never skip or duplicate rows.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    docs: Vec<ProductDoc>,
}

impl MemoryCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { docs: Vec::new() }
    }

    #[must_use]
    pub fn with_docs(docs: Vec<ProductDoc>) -> Self {
        Self { docs }
    }

    /// Append a document at the end of the natural order.
    pub fn insert(&mut self, doc: ProductDoc) {
        self.docs.push(doc);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Matching documents in the requested order, pre-windowing.
    fn ordered_matches(&self, predicate: &Predicate, sort: SortMode) -> Vec<&ProductDoc> {
        let mut matches: Vec<&ProductDoc> =
            self.docs.iter().filter(|doc| predicate.matches(doc)).collect();

        if sort.uses_cursor() {
            matches.sort_by(|a, b| sort.compare_keys((a.price, &a.id), (b.price, &b.id)));
        }

        matches
    }

    fn window_after<'a>(
        ordered: &[&'a ProductDoc],
        sort: SortMode,
        cursor: &Cursor,
        len: usize,
    ) -> Vec<&'a ProductDoc> {
        if sort.uses_cursor() {
            let Some(value) = cursor.last_sort_value else {
                // A price-ordered continuation without a sort value cannot
                // be positioned; treat it as an empty window.
                return Vec::new();
            };
            let boundary = (value, cursor.last_item_id.as_str());

            ordered
                .iter()
                .filter(|doc| {
                    sort.compare_keys((doc.price, &doc.id), boundary) == Ordering::Greater
                })
                .take(len)
                .copied()
                .collect()
        } else {
            // Natural order has no boundary key; anchor on the id's
            // position within the filtered sequence.
            let Some(position) = ordered.iter().position(|doc| doc.id == cursor.last_item_id)
            else {
                return Vec::new();
            };

            ordered.iter().skip(position + 1).take(len).copied().collect()
        }
    }
}

impl ProductSource for MemoryCatalog {
    fn window(
        &self,
        predicate: &Predicate,
        sort: SortMode,
        window: &QueryWindow,
    ) -> Result<Vec<Item>, SourceError> {
        let ordered = self.ordered_matches(predicate, sort);

        let docs: Vec<&ProductDoc> = match window {
            QueryWindow::Offset { start, len } => {
                ordered.iter().skip(*start).take(*len).copied().collect()
            }
            QueryWindow::After { cursor, len } => Self::window_after(&ordered, sort, cursor, *len),
        };

        Ok(docs.into_iter().map(Item::project).collect())
    }

    fn count(&self, predicate: &Predicate) -> Result<u64, SourceError> {
        let matched = self.docs.iter().filter(|doc| predicate.matches(doc)).count();

        Ok(matched as u64)
    }
}
