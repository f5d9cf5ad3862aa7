use serde::{Deserialize, Serialize};

use crate::error::ShantenError;

pub const TILE_MAX: usize = 34;

/// Number of canonical sequence positions (ranks 1-7 in each of the three suits).
pub const NUM_SEQUENCES: usize = 7 * 3;

/// Shanten reported when no goal survives the caller's bound.
pub const INFINITY_SHANTEN: i32 = i32::MAX;

/// Ceiling used by the convenience entry point; above any reachable shanten
/// of a four-meld-plus-pair hand.
pub const MAX_SHANTEN_NUMBER: i32 = 8;

/// A histogram of tile kinds (0-33). Red fives are folded into plain fives.
pub type TileCounts = [i32; TILE_MAX];

/// First kind of each canonical sequence.
pub const SEQUENCE_STARTS: [u8; NUM_SEQUENCES] = [
    0, 1, 2, 3, 4, 5, 6, // 1m-7m
    9, 10, 11, 12, 13, 14, 15, // 1p-7p
    18, 19, 20, 21, 22, 23, 24, // 1s-7s
];

/// Checks every count is within 0..=4 and returns the hand size.
pub fn count_tiles(counts: &TileCounts) -> Result<i32, ShantenError> {
    let mut sum = 0;
    for (kind, &count) in counts.iter().enumerate() {
        if !(0..=4).contains(&count) {
            return Err(ShantenError::InvalidHand { kind, count });
        }
        sum += count;
    }
    Ok(sum)
}

/// Builds a count vector from 34-kind tile ids.
pub fn counts_from_tiles(tiles: &[u8]) -> TileCounts {
    let mut counts = [0; TILE_MAX];
    for &t in tiles {
        if (t as usize) < TILE_MAX {
            counts[t as usize] += 1;
        }
    }
    counts
}

pub fn is_honor(kind: usize) -> bool {
    kind >= 27
}

/// Terminals and honors.
pub fn is_yaochu(kind: usize) -> bool {
    is_honor(kind) || kind % 9 == 0 || kind % 9 == 8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Triplet,
    Sequence,
    Pair,
}

/// A structural unit of a complete hand, keyed by its lowest tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    Triplet(u8),
    Sequence(u8),
    Pair(u8),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Triplet(_) => BlockKind::Triplet,
            Block::Sequence(_) => BlockKind::Sequence,
            Block::Pair(_) => BlockKind::Pair,
        }
    }

    pub fn tiles(&self) -> Vec<u8> {
        match *self {
            Block::Triplet(t) => vec![t, t, t],
            Block::Sequence(t) => vec![t, t + 1, t + 2],
            Block::Pair(t) => vec![t, t],
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.kind() {
            BlockKind::Triplet => "triplet",
            BlockKind::Sequence => "sequence",
            BlockKind::Pair => "pair",
        };
        let tiles: Vec<&str> = self
            .tiles()
            .iter()
            .map(|&t| crate::parser::tile_name(t as usize))
            .collect();
        write!(f, "{}: [{}]", name, tiles.join(" "))
    }
}
