//! Readiness and discard helpers built on the shanten search.

use rayon::prelude::*;
use tracing::debug;

use crate::config::ShantenOptions;
use crate::error::ShantenError;
use crate::goal::ShantenAnalysis;
use crate::shanten::analyze_shanten_with;
use crate::types::{TileCounts, INFINITY_SHANTEN, TILE_MAX};

/// True when the hand is ready (or already complete) in the standard form.
pub fn is_tenpai_general(hand: &TileCounts) -> Result<bool, ShantenError> {
    let analysis = analyze_shanten_with(hand, &ShantenOptions::for_tenpai_check())?;
    Ok(analysis.shanten <= 0)
}

/// True when the counts already form melds plus a pair.
pub fn is_complete_general(hand: &TileCounts) -> Result<bool, ShantenError> {
    let analysis = analyze_shanten_with(hand, &ShantenOptions::default().with_bound(-1))?;
    Ok(analysis.shanten == -1)
}

/// For each kind, the best goal shanten among goals that discard that kind.
/// Kinds no goal discards stay at [`INFINITY_SHANTEN`].
pub fn shanten_after_discard(analysis: &ShantenAnalysis) -> [i32; TILE_MAX] {
    let mut shantens = [INFINITY_SHANTEN; TILE_MAX];
    for goal in &analysis.goals {
        for (kind, shanten) in shantens.iter_mut().enumerate() {
            if goal.throwable_vector[kind] > 0 && goal.shanten < *shanten {
                *shanten = goal.shanten;
            }
        }
    }
    shantens
}

/// Kinds that some goal at the minimal shanten still needs.
pub fn acceptance_tiles(analysis: &ShantenAnalysis) -> [bool; TILE_MAX] {
    acceptance_tiles_within(analysis, 0)
}

/// Kinds needed by goals up to `slack` above the minimal shanten.
///
/// Only goals present in `analysis` count, so it must have been searched
/// with at least this slack (see [`ShantenOptions::for_acceptance`]).
pub fn acceptance_tiles_within(analysis: &ShantenAnalysis, slack: i32) -> [bool; TILE_MAX] {
    let limit = analysis.shanten.saturating_add(slack.max(0));
    let mut accepted = [false; TILE_MAX];
    for goal in analysis.goals.iter().filter(|g| g.shanten <= limit) {
        for (kind, flag) in accepted.iter_mut().enumerate() {
            *flag |= goal.required_vector[kind] > 0;
        }
    }
    accepted
}

/// Kinds whose discard leaves the hand ready, in kind order.
///
/// Returns an empty list when the hand itself is not ready. Each discard is
/// an independent search and they run in parallel.
pub fn riichi_discard_candidates(hand: &TileCounts) -> Result<Vec<usize>, ShantenError> {
    if !is_tenpai_general(hand)? {
        return Ok(Vec::new());
    }

    let checked: Vec<Option<usize>> = (0..TILE_MAX)
        .into_par_iter()
        .map(|kind| -> Result<Option<usize>, ShantenError> {
            if hand[kind] == 0 {
                return Ok(None);
            }
            let mut after = *hand;
            after[kind] -= 1;
            Ok(is_tenpai_general(&after)?.then_some(kind))
        })
        .collect::<Result<_, _>>()?;

    let candidates: Vec<usize> = checked.into_iter().flatten().collect();
    debug!(candidates = candidates.len(), "riichi discard candidates");
    Ok(candidates)
}
