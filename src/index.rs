use std::collections::{hash_map::Entry, HashMap};

use bitvec::prelude::*;
use log::debug;

use crate::{
    error::{Error, Result},
    itemset::Itemset,
    types::{Item, ItemId, SupportCount, TransactionId},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// The transactions that contain one item, as a bitset over transaction positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostingSet {
    bits: BitVec,
}

impl PostingSet {
    fn new(num_transactions: usize) -> Self {
        PostingSet {
            bits: BitVec::repeat(false, num_transactions),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn contains(&self, transaction: TransactionId) -> bool {
        transaction < self.bits.len() && self.bits[transaction]
    }

    pub fn iter(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.bits.iter_ones()
    }
}

/// Inverted index from item to the transactions containing it.
///
/// Item tokens are interned to dense [`ItemId`]s in order of first appearance.
/// The index is immutable once built and can be shared across threads.
#[derive(Clone, Debug)]
pub struct TransactionIndex<I> {
    inventory: Vec<I>,
    reverse_lookup: HashMap<I, ItemId>,
    postings: Vec<PostingSet>,
    num_transactions: usize,
}

impl<I: Item> TransactionIndex<I> {
    /// Index a sequence of transactions. Repeated items within one transaction count once.
    pub fn build<T, It>(raw_transactions: T) -> Self
    where
        T: IntoIterator<Item = It>,
        It: IntoIterator<Item = I>,
    {
        let mut inventory: Vec<I> = Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut reverse_lookup: HashMap<I, ItemId> =
            HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut transactions: Vec<Vec<ItemId>> = Vec::new();

        for raw_transaction in raw_transactions {
            let mut items: Vec<ItemId> = raw_transaction
                .into_iter()
                .map(|item| match reverse_lookup.entry(item) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        let item_id = inventory.len();
                        inventory.push(entry.key().clone());
                        entry.insert(item_id);
                        item_id
                    }
                })
                .collect();
            items.sort_unstable();
            items.dedup();
            transactions.push(items);
        }

        let num_transactions = transactions.len();
        let mut postings = vec![PostingSet::new(num_transactions); inventory.len()];
        for (transaction_id, items) in transactions.iter().enumerate() {
            for &item_id in items {
                let posting = &mut postings[item_id];
                debug_assert!(!posting.bits[transaction_id], "duplicate item in transaction");
                posting.bits.set(transaction_id, true);
            }
        }

        debug!(
            "Indexed {} transactions over {} distinct items",
            num_transactions,
            inventory.len()
        );

        TransactionIndex {
            inventory,
            reverse_lookup,
            postings,
            num_transactions,
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    /// Ids of all indexed items, in order of first appearance.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> {
        0..self.inventory.len()
    }

    pub fn item(&self, item_id: ItemId) -> Option<&I> {
        self.inventory.get(item_id)
    }

    pub fn lookup(&self, item: &I) -> Option<ItemId> {
        self.reverse_lookup.get(item).copied()
    }

    pub fn posting(&self, item_id: ItemId) -> Result<&PostingSet> {
        self.postings
            .get(item_id)
            .ok_or_else(|| Error::MissingKey(format!("#{}", item_id)))
    }

    /// Item tokens of an itemset, in id order.
    ///
    /// Panics if the itemset was not built from this index.
    pub fn resolve(&self, itemset: &Itemset) -> Vec<I> {
        itemset
            .iter()
            .map(|&item_id| self.inventory[item_id].clone())
            .collect()
    }

    /// Number of transactions containing every member of `itemset`.
    ///
    /// The posting sets are never modified: the first member's set is copied
    /// and the others are intersected into the copy.
    pub fn support(&self, itemset: &Itemset) -> Result<SupportCount> {
        let mut members = itemset.iter();
        let first = match members.next() {
            Some(&item_id) => item_id,
            None => {
                return Err(Error::InvalidArgument(
                    "cannot compute the support of an empty itemset".to_string(),
                ))
            }
        };

        let mut working = self.posting(first)?.bits.clone();
        for &item_id in members {
            if working.not_any() {
                return Ok(0);
            }
            working &= self.posting(item_id)?.bits.as_bitslice();
        }

        Ok(working.count_ones())
    }

    /// Support of a set of raw item tokens.
    pub fn support_of(&self, items: &[I]) -> Result<SupportCount> {
        let item_ids = items
            .iter()
            .map(|item| {
                self.lookup(item)
                    .ok_or_else(|| Error::MissingKey(format!("{:?}", item)))
            })
            .collect::<Result<Vec<ItemId>>>()?;
        self.support(&Itemset::from_items(item_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample_index() -> TransactionIndex<&'static str> {
        TransactionIndex::build(vec![
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["a"],
            vec!["b", "c"],
            vec!["c"],
        ])
    }

    #[test]
    fn postings_list_exactly_the_containing_transactions() {
        let index = sample_index();
        assert_eq!(index.num_transactions(), 5);
        assert_eq!(index.num_items(), 3);

        let postings_of = |item| {
            let item_id = index.lookup(&item).unwrap();
            index.posting(item_id).unwrap().iter().collect::<Vec<_>>()
        };
        assert_eq!(postings_of("a"), vec![0, 1, 2]);
        assert_eq!(postings_of("b"), vec![0, 1, 3]);
        assert_eq!(postings_of("c"), vec![1, 3, 4]);
    }

    #[test]
    fn item_ids_follow_first_appearance() {
        let index = TransactionIndex::build(vec![vec!["z", "y"], vec!["x", "z"]]);
        assert_eq!(index.lookup(&"z"), Some(0));
        assert_eq!(index.lookup(&"y"), Some(1));
        assert_eq!(index.lookup(&"x"), Some(2));
        assert_eq!(index.item(2), Some(&"x"));
        assert_eq!(index.lookup(&"w"), None);
    }

    #[test]
    fn duplicate_items_within_a_transaction_count_once() {
        let index = TransactionIndex::build(vec![vec!["a", "a", "b"], vec!["a"]]);
        assert_eq!(index.support_of(&["a"]).unwrap(), 2);
        assert_eq!(index.support_of(&["a", "b"]).unwrap(), 1);
    }

    #[test]
    fn empty_transactions_still_count() {
        let index = TransactionIndex::build(vec![vec!["a"], vec![], vec!["a"]]);
        assert_eq!(index.num_transactions(), 3);
        let posting = index.posting(0).unwrap();
        assert_eq!(posting.len(), 2);
        assert!(posting.contains(2));
        assert!(!posting.contains(1));
        assert!(!posting.contains(7));
    }

    #[test]
    fn support_intersects_postings() {
        let index = sample_index();
        assert_eq!(index.support_of(&["a"]).unwrap(), 3);
        assert_eq!(index.support_of(&["a", "b"]).unwrap(), 2);
        assert_eq!(index.support_of(&["a", "c"]).unwrap(), 1);
        assert_eq!(index.support_of(&["b", "c"]).unwrap(), 2);
        assert_eq!(index.support_of(&["c", "b", "a"]).unwrap(), 1);
    }

    #[test]
    fn support_short_circuits_to_zero() {
        let index = TransactionIndex::build(vec![vec!["a"], vec!["b"], vec!["c"]]);
        assert_eq!(index.support_of(&["a", "b", "c"]).unwrap(), 0);
    }

    #[test]
    fn support_does_not_mutate_postings() {
        let index = sample_index();
        let before = index.postings.clone();
        index.support_of(&["a", "c"]).unwrap();
        index.support_of(&["a", "b", "c"]).unwrap();
        assert_eq!(index.postings, before);
    }

    #[test]
    fn empty_itemset_is_rejected() {
        let index = sample_index();
        let result = index.support(&Itemset::from_items(vec![]));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn unknown_items_are_missing_keys() {
        let index = sample_index();
        assert!(matches!(index.support_of(&["q"]), Err(Error::MissingKey(_))));
        assert!(matches!(
            index.support(&Itemset::singleton(42)),
            Err(Error::MissingKey(_))
        ));
    }

    #[test]
    fn support_is_anti_monotone() {
        let index = TransactionIndex::build(vec![
            vec![1, 2, 3, 4],
            vec![1, 2, 4],
            vec![2, 3],
            vec![1, 3, 4],
            vec![4],
        ]);
        let all_ids: Vec<ItemId> = index.item_ids().collect();
        let subsets: Vec<Itemset> = (1..=all_ids.len())
            .flat_map(|size| all_ids.iter().copied().combinations(size))
            .map(Itemset::from_items)
            .collect();

        for small in &subsets {
            for big in subsets.iter().filter(|big| big.is_superset_of(small)) {
                assert!(index.support(small).unwrap() >= index.support(big).unwrap());
            }
        }
    }
}
