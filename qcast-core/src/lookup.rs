//! Id-keyed lookup over a flat item collection.

use std::collections::HashMap;

use qcast_model::Hierarchical;

/// One-pass index from item id to item reference. Built once per fetched
/// collection and shared by the path helpers, the reorder translator, and
/// drop-zone inference so each lookup stays O(1).
#[derive(Debug)]
pub struct ItemIndex<'a, T: Hierarchical> {
    by_id: HashMap<T::Id, &'a T>,
}

impl<'a, T: Hierarchical> ItemIndex<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            // First occurrence wins if the backend ever sends a duplicate id.
            by_id.entry(item.node_id()).or_insert(item);
        }
        Self { by_id }
    }

    pub fn get(&self, id: T::Id) -> Option<&'a T> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The parent an item actually resolves to: `None` when the item is
    /// unknown, its parent link is absent, points at itself, or points at an
    /// id not present in the collection. This is the orphan-as-root rule in
    /// lookup form.
    pub fn resolved_parent(&self, id: T::Id) -> Option<T::Id> {
        self.get(id)?
            .parent()
            .filter(|parent| *parent != id && self.contains(*parent))
    }

    /// Whether two items currently share a parent (both root counts as
    /// shared). Drives the same-level vs cross-level drop distinction.
    pub fn are_siblings(&self, a: T::Id, b: T::Id) -> bool {
        self.contains(a)
            && self.contains(b)
            && self.resolved_parent(a) == self.resolved_parent(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::testing::{item, orphan, root};

    #[test]
    fn resolved_parent_treats_unknown_parent_as_root() {
        let items = vec![root(1, "a"), orphan(2, 99, "lost")];
        let index = ItemIndex::new(&items);

        assert_eq!(index.resolved_parent(2.into()), None);
    }

    #[test]
    fn resolved_parent_ignores_self_reference() {
        let items = vec![orphan(7, 7, "selfie")];
        let index = ItemIndex::new(&items);

        assert_eq!(index.resolved_parent(7.into()), None);
    }

    #[test]
    fn siblings_share_a_resolved_parent() {
        let items = vec![
            root(1, "p"),
            item(2, Some(1), 0, "a"),
            item(3, Some(1), 1, "b"),
            item(4, Some(2), 0, "nested"),
        ];
        let index = ItemIndex::new(&items);

        assert!(index.are_siblings(2.into(), 3.into()));
        assert!(!index.are_siblings(2.into(), 4.into()));
        // Two roots are siblings of each other.
        assert!(index.are_siblings(1.into(), 1.into()));
    }

    #[test]
    fn orphans_count_as_root_siblings() {
        let items = vec![root(1, "a"), orphan(2, 99, "lost")];
        let index = ItemIndex::new(&items);

        assert!(index.are_siblings(1.into(), 2.into()));
    }
}
