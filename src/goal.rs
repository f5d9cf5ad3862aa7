use serde::{Deserialize, Serialize};

use crate::types::{Block, TileCounts, INFINITY_SHANTEN, TILE_MAX};

/// A complete hand reachable from the analysed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Exchanges needed to reach this hand; -1 when the hand already is it.
    pub shanten: i32,
    /// Melds in search order followed by the pair.
    pub blocks: Vec<Block>,
    /// Tile counts of the complete hand.
    #[serde(with = "counts_serde")]
    pub count_vector: TileCounts,
    /// Tiles still missing, per kind.
    #[serde(with = "counts_serde")]
    pub required_vector: TileCounts,
    /// Tiles held beyond what the complete hand uses, per kind.
    #[serde(with = "counts_serde")]
    pub throwable_vector: TileCounts,
}

// serde only derives for arrays up to 32 elements.
mod counts_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::TileCounts;

    pub fn serialize<S: Serializer>(counts: &TileCounts, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(counts.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TileCounts, D::Error> {
        let v = Vec::<i32>::deserialize(d)?;
        let len = v.len();
        v.try_into()
            .map_err(|_| D::Error::invalid_length(len, &"34 tile counts"))
    }
}

impl Goal {
    pub(crate) fn new(shanten: i32, blocks: Vec<Block>, count_vector: TileCounts) -> Self {
        Self {
            shanten,
            blocks,
            count_vector,
            required_vector: [0; TILE_MAX],
            throwable_vector: [0; TILE_MAX],
        }
    }
}

/// Result of a shanten search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShantenAnalysis {
    pub shanten: i32,
    pub goals: Vec<Goal>,
}

impl ShantenAnalysis {
    /// The sentinel returned when nothing is reachable within the bound.
    pub fn infeasible() -> Self {
        Self {
            shanten: INFINITY_SHANTEN,
            goals: Vec::new(),
        }
    }

    pub fn is_infeasible(&self) -> bool {
        self.shanten == INFINITY_SHANTEN
    }
}

impl Default for ShantenAnalysis {
    fn default() -> Self {
        Self::infeasible()
    }
}

/// Drops goals above the final bound and fills their required/throwable vectors.
///
/// Goals recorded early in the search may have passed a bound that tightened
/// afterwards, so every goal is checked again here.
pub(crate) fn materialize(
    hand: &TileCounts,
    best: i32,
    raw_goals: Vec<Goal>,
    slack: i32,
    bound: i32,
) -> ShantenAnalysis {
    let final_bound = best.saturating_add(slack).min(bound);

    let goals: Vec<Goal> = raw_goals
        .into_iter()
        .filter(|goal| goal.shanten <= final_bound)
        .map(|mut goal| {
            for k in 0..TILE_MAX {
                goal.required_vector[k] = (goal.count_vector[k] - hand[k]).max(0);
                goal.throwable_vector[k] = (hand[k] - goal.count_vector[k]).max(0);
            }
            goal
        })
        .collect();

    if goals.is_empty() {
        return ShantenAnalysis::infeasible();
    }
    ShantenAnalysis {
        shanten: best,
        goals,
    }
}
