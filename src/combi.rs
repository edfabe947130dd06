use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;

use crate::{
    error::Result,
    index::TransactionIndex,
    itemset::Itemset,
    types::{Item, ItemsetLength, SupportCount},
};

/// Join the frequent itemsets of one level into candidates one item longer.
///
/// Every pair of `prev_level` itemsets (an itemset with itself included) is
/// unioned. A union is kept when it has exactly `target_len` items, was not
/// already produced in this round, and already meets `min_support_count`.
/// Candidates come out in join order.
pub fn generate_candidates<I: Item>(
    prev_level: &[(Itemset, SupportCount)],
    target_len: ItemsetLength,
    index: &TransactionIndex<I>,
    min_support_count: f64,
) -> Result<Vec<Itemset>> {
    let mut seen: HashSet<Itemset> = HashSet::with_capacity(prev_level.len());
    let mut joined: Vec<Itemset> = Vec::with_capacity(prev_level.len());

    for (i, (left, _)) in prev_level.iter().enumerate() {
        for (right, _) in &prev_level[i..] {
            let union = left.union(right);
            if union.len() == target_len && !seen.contains(&union) {
                seen.insert(union.clone());
                joined.push(union);
            }
        }
    }

    let supports = joined
        .par_iter()
        .map(|candidate| index.support(candidate))
        .collect::<Result<Vec<SupportCount>>>()?;

    let candidates: Vec<Itemset> = joined
        .into_iter()
        .zip(supports)
        .filter(|&(_, support)| support as f64 >= min_support_count)
        .map(|(candidate, _)| candidate)
        .collect();

    debug!(
        "Joined {} distinct itemsets of length {}, {} meet the threshold",
        seen.len(),
        target_len,
        candidates.len()
    );

    Ok(candidates)
}
