//! Search parameters for the shanten engine.

use crate::types::MAX_SHANTEN_NUMBER;

/// Configuration for one shanten search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShantenOptions {
    /// Extra shanten tolerated when enumerating goals.
    /// Widens the goal list without changing the minimal shanten.
    pub slack: i32,

    /// Highest shanten the search will report. A bound below the true
    /// minimal shanten yields the infinite sentinel with no goals.
    pub bound: i32,
}

impl Default for ShantenOptions {
    fn default() -> Self {
        Self {
            slack: 0,
            bound: MAX_SHANTEN_NUMBER,
        }
    }
}

impl ShantenOptions {
    /// Goals one step beyond the minimum, used for acceptance and discard metrics.
    pub fn for_acceptance() -> Self {
        Self {
            slack: 1,
            bound: MAX_SHANTEN_NUMBER,
        }
    }

    /// Cheapest search that still answers "is this hand ready".
    pub fn for_tenpai_check() -> Self {
        Self { slack: 0, bound: 0 }
    }

    pub fn with_slack(mut self, slack: i32) -> Self {
        self.slack = slack;
        self
    }

    pub fn with_bound(mut self, bound: i32) -> Self {
        self.bound = bound;
        self
    }
}
