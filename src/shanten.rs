//! Shanten search for the standard form (melds plus one pair).
//!
//! The search is a depth-first enumeration of block multisets with branch
//! and bound pruning. Seven pairs and thirteen orphans live in [`crate::special`].
//!
//! Melds are addressed through a single cursor: ids `0..34` are triplets of
//! that kind, ids `34..55` are the canonical sequences. A path only moves the
//! cursor forward, so every multiset of blocks is produced exactly once and
//! no triplet is chosen after a sequence.

use tracing::{debug, trace};

use crate::config::ShantenOptions;
use crate::error::ShantenError;
use crate::goal::{materialize, Goal, ShantenAnalysis};
use crate::types::{count_tiles, Block, TileCounts, NUM_SEQUENCES, SEQUENCE_STARTS, TILE_MAX};

const MAX_MELDS: i32 = 4;

/// Analyses `hand` with slack 0 and bound 8.
pub fn analyze_shanten(hand: &TileCounts) -> Result<ShantenAnalysis, ShantenError> {
    analyze_shanten_with(hand, &ShantenOptions::default())
}

/// Analyses `hand` listing goals up to `slack` above the minimum; `bound` caps the search.
pub fn analyze_shanten_with_option(
    hand: &TileCounts,
    slack: i32,
    bound: i32,
) -> Result<ShantenAnalysis, ShantenError> {
    analyze_shanten_with(hand, &ShantenOptions { slack, bound })
}

/// Computes the shanten number of `hand` and every goal within
/// `options.slack` of it, never reporting more than `options.bound`.
pub fn analyze_shanten_with(
    hand: &TileCounts,
    options: &ShantenOptions,
) -> Result<ShantenAnalysis, ShantenError> {
    let num_tiles = count_tiles(hand)?;
    let num_melds = (num_tiles / 3).min(MAX_MELDS);
    let slack = options.slack.max(0);
    debug!(
        num_tiles,
        num_melds,
        slack,
        bound = options.bound,
        "analyzing shanten"
    );

    let mut search = Search::new(hand, num_melds as usize, slack);
    let best = search.descend(-1, num_melds as usize, 0, options.bound);
    let raw_goals = search.goals.len();

    let analysis = materialize(hand, best, search.goals, slack, options.bound);
    trace!(
        shanten = analysis.shanten,
        raw_goals,
        goals = analysis.goals.len(),
        "shanten search finished"
    );
    Ok(analysis)
}

/// Cost of a triplet of `kind`, or `None` when it cannot or need not be built.
fn triplet_cost(hand: &TileCounts, target: &TileCounts, kind: usize) -> Option<i32> {
    if target[kind] >= 2 {
        return None;
    }
    let available = hand[kind] - target[kind];
    let cost = (3 - available).clamp(0, 3);
    (cost < 3).then_some(cost)
}

/// Cost of the sequence starting at `first`, with the same pruning as triplets.
fn sequence_cost(hand: &TileCounts, target: &TileCounts, first: usize) -> Option<i32> {
    if (first..first + 3).any(|k| target[k] >= 4) {
        return None;
    }
    let cost = (first..first + 3)
        .filter(|&k| hand[k] <= target[k])
        .count() as i32;
    (cost < 3).then_some(cost)
}

/// Cost of the pair of `kind`. A pair built from nothing is still admissible.
fn pair_cost(hand: &TileCounts, target: &TileCounts, kind: usize) -> Option<i32> {
    if target[kind] > 2 {
        return None;
    }
    Some((target[kind] + 2 - hand[kind]).max(0))
}

// Per-call search state. The bound is threaded through `descend` return values.
struct Search<'a> {
    hand: &'a TileCounts,
    target: TileCounts,
    blocks: Vec<Block>,
    goals: Vec<Goal>,
    slack: i32,
}

impl<'a> Search<'a> {
    fn new(hand: &'a TileCounts, num_melds: usize, slack: i32) -> Self {
        Self {
            hand,
            target: [0; TILE_MAX],
            blocks: Vec::with_capacity(num_melds + 1),
            goals: Vec::new(),
            slack,
        }
    }

    fn within(&self, distance: i32, bound: i32) -> bool {
        distance <= bound.saturating_add(self.slack)
    }

    /// Adds blocks from `min_meld_id` onward and returns the tightened bound.
    fn descend(
        &mut self,
        distance: i32,
        melds_left: usize,
        min_meld_id: usize,
        mut bound: i32,
    ) -> i32 {
        if melds_left == 0 {
            return self.close_with_pair(distance, bound);
        }

        // Triplets
        for kind in min_meld_id..TILE_MAX {
            let Some(cost) = triplet_cost(self.hand, &self.target, kind) else {
                continue;
            };
            let next = distance + cost;
            if !self.within(next, bound) {
                continue;
            }
            self.target[kind] += 3;
            self.blocks.push(Block::Triplet(kind as u8));
            // The same triplet can only be taken once.
            bound = self.descend(next, melds_left - 1, kind + 1, bound);
            self.blocks.pop();
            self.target[kind] -= 3;
        }

        // Sequences
        let first_sequence = min_meld_id.saturating_sub(TILE_MAX);
        for seq_id in first_sequence..NUM_SEQUENCES {
            let first = SEQUENCE_STARTS[seq_id] as usize;
            let Some(cost) = sequence_cost(self.hand, &self.target, first) else {
                continue;
            };
            let next = distance + cost;
            if !self.within(next, bound) {
                continue;
            }
            for k in first..first + 3 {
                self.target[k] += 1;
            }
            self.blocks.push(Block::Sequence(first as u8));
            bound = self.descend(next, melds_left - 1, TILE_MAX + seq_id, bound);
            self.blocks.pop();
            for k in first..first + 3 {
                self.target[k] -= 1;
            }
        }

        bound
    }

    fn close_with_pair(&mut self, distance: i32, mut bound: i32) -> i32 {
        for kind in 0..TILE_MAX {
            let Some(cost) = pair_cost(self.hand, &self.target, kind) else {
                continue;
            };
            let shanten = distance + cost;
            if !self.within(shanten, bound) {
                continue;
            }

            let mut count_vector = self.target;
            count_vector[kind] += 2;
            let mut blocks = Vec::with_capacity(self.blocks.len() + 1);
            blocks.extend_from_slice(&self.blocks);
            blocks.push(Block::Pair(kind as u8));
            self.goals.push(Goal::new(shanten, blocks, count_vector));

            bound = bound.min(shanten);
        }
        bound
    }
}
