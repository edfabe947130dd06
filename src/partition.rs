use rayon::prelude::*;

use crate::{
    error::Result,
    index::TransactionIndex,
    itemset::Itemset,
    types::{Item, ItemsetCounts, SupportCount},
};

/// One level of candidates sorted by descending support, split at `cut`.
///
/// `candidates[..cut]` meet the threshold, `candidates[cut..]` do not.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub candidates: ItemsetCounts,
    pub cut: usize,
}

impl Partition {
    pub fn frequent(&self) -> &[(Itemset, SupportCount)] {
        &self.candidates[..self.cut]
    }

    pub fn into_frequent(mut self) -> ItemsetCounts {
        self.candidates.truncate(self.cut);
        self.candidates
    }

    pub fn infrequent(&self) -> &[(Itemset, SupportCount)] {
        &self.candidates[self.cut..]
    }
}

/// Sort `candidates` by descending support and locate the first one below `min_support_count`.
///
/// The sort is stable, so candidates with equal support keep their input order.
/// Since support is non-increasing along the sorted level, "meets the threshold"
/// holds on a prefix and a binary search finds its end.
pub fn partition<I: Item>(
    candidates: Vec<Itemset>,
    index: &TransactionIndex<I>,
    min_support_count: f64,
) -> Result<Partition> {
    let mut candidates = candidates
        .into_par_iter()
        .map(|candidate| {
            index
                .support(&candidate)
                .map(|support| (candidate, support))
        })
        .collect::<Result<ItemsetCounts>>()?;

    candidates.sort_by(|(_, a), (_, b)| b.cmp(a));
    let cut = candidates.partition_point(|&(_, support)| support as f64 >= min_support_count);

    Ok(Partition { candidates, cut })
}
