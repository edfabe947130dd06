use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::ItemsetLength;

/// How the closed-itemset filter looks for equal-support supersets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosureCheck {
    /// Only supersets one item longer are inspected.
    NextLevel,
    /// Supersets of any length found in the mined itemsets are inspected.
    AllLevels,
    /// Like `NextLevel`, but a level with no longer itemsets after it
    /// contributes nothing, so maximal itemsets of the last level are never
    /// reported.
    RequireNextLevel,
}

impl Default for ClosureCheck {
    fn default() -> Self {
        ClosureCheck::NextLevel
    }
}

impl FromStr for ClosureCheck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "next_level" => Ok(ClosureCheck::NextLevel),
            "all_levels" => Ok(ClosureCheck::AllLevels),
            "require_next_level" => Ok(ClosureCheck::RequireNextLevel),
            _ => Err(Error::InvalidArgument(format!(
                "unknown closure check {:?}, expected next_level, all_levels \
                 or require_next_level",
                s
            ))),
        }
    }
}

/// Settings of a mining run.
#[derive(Clone, Debug, PartialEq)]
pub struct MiningConfig {
    /// Relative minimum support, a fraction in (0, 1].
    pub min_support: f64,
    /// Longest itemset length to mine. `None` mines until a level comes up empty.
    pub max_len: Option<ItemsetLength>,
    /// Accept an empty transaction list instead of rejecting it.
    pub allow_empty: bool,
    /// Which supersets disqualify an itemset from being closed.
    pub closure: ClosureCheck,
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            min_support: 0.01,
            max_len: None,
            allow_empty: false,
            closure: ClosureCheck::default(),
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        MiningConfig {
            min_support,
            ..Default::default()
        }
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_closure(mut self, closure: ClosureCheck) -> Self {
        self.closure = closure;
        self
    }

    /// Reject settings that cannot describe a mining run.
    pub fn validate(&self) -> Result<()> {
        if !self.min_support.is_finite() || self.min_support <= 0.0 || self.min_support > 1.0 {
            return Err(Error::InvalidArgument(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        if self.max_len == Some(0) {
            return Err(Error::InvalidArgument(
                "max_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute support threshold for `num_transactions` transactions.
    ///
    /// The product is not rounded: an integer support is compared against it with `>=`.
    pub fn min_support_count(&self, num_transactions: usize) -> f64 {
        num_transactions as f64 * self.min_support
    }

    pub(crate) fn check_num_transactions(&self, num_transactions: usize) -> Result<()> {
        if num_transactions == 0 && !self.allow_empty {
            return Err(Error::InvalidArgument(
                "transaction list is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MiningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.closure, ClosureCheck::NextLevel);
        assert_eq!(config.max_len, None);
    }

    #[test]
    fn parses_closure_checks() {
        assert_eq!("next_level".parse::<ClosureCheck>(), Ok(ClosureCheck::NextLevel));
        assert_eq!("all_levels".parse::<ClosureCheck>(), Ok(ClosureCheck::AllLevels));
        assert_eq!(
            "require_next_level".parse::<ClosureCheck>(),
            Ok(ClosureCheck::RequireNextLevel)
        );
        assert!(matches!(
            "strict".parse::<ClosureCheck>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_support() {
        for &min_support in &[0.0, -0.5, 1.01, f64::NAN, f64::INFINITY] {
            let result = MiningConfig::new(min_support).validate();
            assert!(
                matches!(result, Err(Error::InvalidArgument(_))),
                "accepted {}",
                min_support
            );
        }
        assert!(MiningConfig::new(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_zero_max_len() {
        let config = MiningConfig::new(0.5).with_max_len(0);
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
        assert!(MiningConfig::new(0.5).with_max_len(1).validate().is_ok());
    }

    #[test]
    fn min_support_count_is_not_rounded() {
        let config = MiningConfig::new(0.5);
        assert_eq!(config.min_support_count(5), 2.5);
        assert_eq!(config.min_support_count(0), 0.0);
    }

    #[test]
    fn empty_input_needs_opt_in() {
        let config = MiningConfig::new(0.5);
        assert!(config.check_num_transactions(0).is_err());
        assert!(config.check_num_transactions(1).is_ok());
        assert!(config.with_allow_empty(true).check_num_transactions(0).is_ok());
    }
}
