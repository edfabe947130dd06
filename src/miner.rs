use log::{debug, info};

use crate::{
    closed::filter_closed,
    combi::generate_candidates,
    config::{ClosureCheck, MiningConfig},
    error::Result,
    index::TransactionIndex,
    itemset::Itemset,
    output::ItemsetSupport,
    partition::partition,
    types::{Item, ItemsetCounts, ItemsetLength, SupportCount},
};

/// Everything discovered by one mining run.
///
/// Frequent itemsets are kept level by level, each level in descending
/// support order, alongside cumulative level sizes.
#[derive(Clone, Debug)]
pub struct MiningResult<I> {
    index: TransactionIndex<I>,
    accumulated: ItemsetCounts,
    boundaries: Vec<usize>,
    min_support_count: f64,
    exhausted: bool,
    closure: ClosureCheck,
}

/// Mine frequent itemsets from a list of transactions.
pub fn mine<I, T, It>(raw_transactions: T, config: &MiningConfig) -> Result<MiningResult<I>>
where
    I: Item,
    T: IntoIterator<Item = It>,
    It: IntoIterator<Item = I>,
{
    mine_index(TransactionIndex::build(raw_transactions), config)
}

/// Mine frequent itemsets level by level over an already built index.
///
/// Each round partitions the current candidates, appends the frequent ones
/// and joins them into the next round's candidates. Mining stops after a
/// round with no frequent itemsets, or after `config.max_len` rounds.
pub fn mine_index<I: Item>(
    index: TransactionIndex<I>,
    config: &MiningConfig,
) -> Result<MiningResult<I>> {
    config.validate()?;
    config.check_num_transactions(index.num_transactions())?;

    let min_support_count = config.min_support_count(index.num_transactions());
    info!(
        "Mining {} transactions with minimum support count {}",
        index.num_transactions(),
        min_support_count
    );

    let mut accumulated: ItemsetCounts = Vec::new();
    let mut boundaries: Vec<usize> = vec![0];
    let mut candidates: Vec<Itemset> = index.item_ids().map(Itemset::singleton).collect();
    let mut size: ItemsetLength = 1;

    let exhausted = loop {
        info!(
            "Counting {} candidate itemsets of length {}.",
            candidates.len(),
            size
        );
        debug_assert!(candidates.iter().all(|candidate| candidate.len() == size));

        let level = partition(candidates, &index, min_support_count)?;
        let num_frequent = level.cut;
        accumulated.extend(level.into_frequent());
        boundaries.push(accumulated.len());
        debug!("{} frequent itemsets of length {}", num_frequent, size);

        if num_frequent == 0 {
            break true;
        }

        let prev_level = &accumulated[boundaries[size - 1]..boundaries[size]];
        candidates = generate_candidates(prev_level, size + 1, &index, min_support_count)?;

        if config.max_len.map_or(false, |max_len| size >= max_len) {
            // Joined candidates are pre-filtered, so none left means nothing longer is frequent.
            if candidates.is_empty() {
                boundaries.push(accumulated.len());
                break true;
            }
            info!("Stopping at the maximum itemset length {}", size);
            break false;
        }

        size += 1;
    };

    Ok(MiningResult {
        index,
        accumulated,
        boundaries,
        min_support_count,
        exhausted,
        closure: config.closure,
    })
}

impl<I: Item> MiningResult<I> {
    pub fn index(&self) -> &TransactionIndex<I> {
        &self.index
    }

    /// All frequent itemsets in mining order.
    pub fn accumulated(&self) -> &[(Itemset, SupportCount)] {
        &self.accumulated
    }

    /// Cumulative itemset counts per length, starting with 0.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn min_support_count(&self) -> f64 {
        self.min_support_count
    }

    pub fn num_transactions(&self) -> usize {
        self.index.num_transactions()
    }

    /// Whether mining ran until a level came up empty rather than stopping at a length limit.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of itemset lengths with at least one frequent itemset.
    pub fn num_levels(&self) -> usize {
        self.boundaries
            .windows(2)
            .filter(|window| window[1] > window[0])
            .count()
    }

    /// Frequent itemsets of length `size` in mining order.
    pub fn level_counts(&self, size: ItemsetLength) -> &[(Itemset, SupportCount)] {
        if size == 0 || size >= self.boundaries.len() {
            return &[];
        }
        &self.accumulated[self.boundaries[size - 1]..self.boundaries[size]]
    }

    /// Every frequent itemset, by descending support.
    pub fn frequent_itemsets(&self) -> Vec<ItemsetSupport<I>> {
        self.resolve_sorted(&self.accumulated)
    }

    /// Frequent itemsets of length `size`, by descending support.
    pub fn level(&self, size: ItemsetLength) -> Vec<ItemsetSupport<I>> {
        self.resolve_sorted(self.level_counts(size))
    }

    /// Closed frequent itemsets under the configured closure check, by descending support.
    pub fn closed_itemsets(&self) -> Vec<ItemsetSupport<I>> {
        self.closed_itemsets_with(self.closure)
    }

    pub fn closed_itemsets_with(&self, closure: ClosureCheck) -> Vec<ItemsetSupport<I>> {
        let closed = filter_closed(&self.accumulated, &self.boundaries, closure);
        self.resolve_sorted(&closed)
    }

    /// Support of any combination of indexed items.
    pub fn support_of(&self, items: &[I]) -> Result<SupportCount> {
        self.index.support_of(items)
    }

    fn resolve_sorted(&self, counts: &[(Itemset, SupportCount)]) -> Vec<ItemsetSupport<I>> {
        let mut resolved: Vec<ItemsetSupport<I>> = counts
            .iter()
            .map(|(itemset, support)| ItemsetSupport {
                items: self.index.resolve(itemset),
                support: *support,
            })
            .collect();
        resolved.sort_by(|a, b| b.support.cmp(&a.support));
        resolved
    }
}
