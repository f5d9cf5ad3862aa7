//! Shanten search for riichi mahjong hands.
//!
//! [`analyze_shanten`] measures how many exchanges a concealed hand needs to
//! become melds plus a pair, and lists every complete hand ("goal") reachable
//! at that distance. Seven pairs and thirteen orphans are handled separately
//! in [`special`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod goal;
pub mod parser;
pub mod shanten;
pub mod special;
pub mod types;

#[cfg(feature = "python")]
mod python;

mod tests;

pub use analysis::{
    acceptance_tiles, acceptance_tiles_within, is_complete_general, is_tenpai_general,
    riichi_discard_candidates, shanten_after_discard,
};
pub use config::ShantenOptions;
pub use error::ShantenError;
pub use goal::{Goal, ShantenAnalysis};
pub use parser::{counts_to_string, parse_hand, parse_tile, tile_name};
pub use shanten::{analyze_shanten, analyze_shanten_with, analyze_shanten_with_option};
pub use types::{Block, BlockKind, TileCounts, INFINITY_SHANTEN, MAX_SHANTEN_NUMBER, TILE_MAX};
