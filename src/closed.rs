use log::debug;

use crate::{
    config::ClosureCheck,
    itemset::Itemset,
    types::{ItemsetCounts, SupportCount},
};

/// Select the closed itemsets from level-ordered mining output.
///
/// `accumulated` holds every frequent itemset level by level, and
/// `boundaries[k]` is the number of itemsets of length `k` or less
/// (`boundaries[0] == 0`). A level is evaluated only when the level after it
/// is recorded in `boundaries`, so a level cut short by a length limit is
/// never reported.
///
/// An itemset is dropped as soon as a longer itemset containing it with the
/// same support is found. With [`ClosureCheck::NextLevel`] only the itemsets
/// one item longer are scanned; with [`ClosureCheck::AllLevels`] every longer
/// level is. An itemset with no superset in the scanned levels is closed.
/// [`ClosureCheck::RequireNextLevel`] scans like `NextLevel` but skips any level
/// whose next level is empty, reporting none of its itemsets.
pub fn filter_closed(
    accumulated: &[(Itemset, SupportCount)],
    boundaries: &[usize],
    closure: ClosureCheck,
) -> ItemsetCounts {
    let mut closed: ItemsetCounts = Vec::new();

    for level in 1..boundaries.len().saturating_sub(1) {
        let current = &accumulated[boundaries[level - 1]..boundaries[level]];
        let next_level = &accumulated[boundaries[level]..boundaries[level + 1]];
        let longer = match closure {
            ClosureCheck::NextLevel | ClosureCheck::RequireNextLevel => next_level,
            ClosureCheck::AllLevels => &accumulated[boundaries[level]..],
        };
        if closure == ClosureCheck::RequireNextLevel && next_level.is_empty() {
            debug!("Skipping itemsets of length {} with nothing longer mined", level);
            continue;
        }

        let num_closed_before = closed.len();
        for (itemset, support) in current {
            debug_assert_eq!(itemset.len(), level);
            let absorbed = longer.iter().any(|(superset, superset_support)| {
                superset_support == support && superset.is_proper_superset_of(itemset)
            });
            if !absorbed {
                closed.push((itemset.clone(), *support));
            }
        }

        debug!(
            "{} of {} itemsets of length {} are closed",
            closed.len() - num_closed_before,
            current.len(),
            level
        );
    }

    closed
}
