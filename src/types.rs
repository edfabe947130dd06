use std::{fmt::Debug, hash::Hash};

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type TransactionId = usize;
pub type SupportCount = usize;
pub type ItemsetLength = usize;

/// Itemsets paired with their support counts, in mining order.
pub type ItemsetCounts = Vec<(Itemset, SupportCount)>;

/// An opaque item token. Only equality, hashing and ordering are relied on.
pub trait Item: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> Item for T {}
