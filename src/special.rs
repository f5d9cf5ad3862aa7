//! Shanten of the two whole-hand shapes the block search does not cover.

use crate::error::ShantenError;
use crate::types::{count_tiles, is_yaochu, TileCounts, INFINITY_SHANTEN, TILE_MAX};

/// Seven pairs shanten. Hands shorter than 13 tiles cannot reach the shape.
pub fn seven_pairs_shanten(hand: &TileCounts) -> Result<i32, ShantenError> {
    if count_tiles(hand)? < 13 {
        return Ok(INFINITY_SHANTEN);
    }

    let pairs = hand.iter().filter(|&&c| c >= 2).count() as i32;
    let kinds = hand.iter().filter(|&&c| c >= 1).count() as i32;

    // Four of a kind is a single pair, so a missing kind costs an extra exchange.
    let mut shanten = 6 - pairs;
    if kinds < 7 {
        shanten += 7 - kinds;
    }
    Ok(shanten)
}

/// Thirteen orphans shanten. Hands shorter than 13 tiles cannot reach the shape.
pub fn thirteen_orphans_shanten(hand: &TileCounts) -> Result<i32, ShantenError> {
    if count_tiles(hand)? < 13 {
        return Ok(INFINITY_SHANTEN);
    }

    let mut unique_count = 0;
    let mut has_pair = false;
    for kind in (0..TILE_MAX).filter(|&k| is_yaochu(k)) {
        if hand[kind] > 0 {
            unique_count += 1;
        }
        if hand[kind] >= 2 {
            has_pair = true;
        }
    }

    Ok(13 - unique_count - if has_pair { 1 } else { 0 })
}
