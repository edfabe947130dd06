use std::fmt;

use itertools::Itertools;

use crate::types::{ItemId, ItemsetLength};

/// A non-empty set of item ids, kept sorted and free of duplicates so that
/// structural equality and hashing match set semantics.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn singleton(item: ItemId) -> Self {
        Itemset(vec![item])
    }

    pub fn from_items<T: IntoIterator<Item = ItemId>>(items: T) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Itemset(items)
    }

    pub fn len(&self) -> ItemsetLength {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Set union, merging the two sorted member lists.
    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset(self.0.iter().merge(other.0.iter()).dedup().copied().collect())
    }

    pub fn is_superset_of(&self, other: &Itemset) -> bool {
        other.len() <= self.len() && other.iter().all(|&item| self.contains(item))
    }

    pub fn is_proper_superset_of(&self, other: &Itemset) -> bool {
        self.len() > other.len() && self.is_superset_of(other)
    }
}

impl fmt::Debug for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_items_sorts_and_dedups() {
        let itemset = Itemset::from_items(vec![3, 1, 3, 2, 1]);
        assert_eq!(itemset.items(), &[1, 2, 3]);
        assert_eq!(itemset, Itemset::from_items(vec![2, 3, 1]));
    }

    #[test]
    fn union_merges_members() {
        let a = Itemset::from_items(vec![1, 2]);
        let b = Itemset::from_items(vec![2, 4]);
        assert_eq!(a.union(&b).items(), &[1, 2, 4]);
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn superset_checks() {
        let small = Itemset::from_items(vec![1, 3]);
        let big = Itemset::from_items(vec![1, 2, 3]);
        assert!(big.is_superset_of(&small));
        assert!(big.is_proper_superset_of(&small));
        assert!(big.is_superset_of(&big));
        assert!(!big.is_proper_superset_of(&big));
        assert!(!small.is_superset_of(&big));
        assert!(!Itemset::from_items(vec![1, 4, 5]).is_superset_of(&small));
    }
}
