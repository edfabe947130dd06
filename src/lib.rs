//! Level-wise (Apriori) mining of frequent and closed frequent itemsets.
//!
//! Transactions are indexed into per-item posting sets, and supports are
//! computed by intersecting them. Each round partitions the current
//! candidates by support, keeps the frequent ones and joins them into the
//! next round's candidates, until a round yields nothing.
//!
//! ```
//! use closed_apriori::{mine, MiningConfig};
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["a", "b", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//!     vec!["c"],
//! ];
//! let result = mine(transactions, &MiningConfig::new(0.4)).unwrap();
//! assert_eq!(result.frequent_itemsets().len(), 5);
//! assert_eq!(result.closed_itemsets().len(), 5);
//! ```

pub mod closed;
pub mod combi;
pub mod config;
pub mod error;
pub mod index;
pub mod itemset;
pub mod miner;
pub mod output;
pub mod partition;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::{ClosureCheck, MiningConfig};
pub use error::{Error, Result};
pub use index::{PostingSet, TransactionIndex};
pub use itemset::Itemset;
pub use miner::{mine, mine_index, MiningResult};
pub use output::{write_patterns, ItemsetSupport};
