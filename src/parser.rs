use crate::error::ShantenError;
use crate::types::{TileCounts, TILE_MAX};

const TILE_NAMES: [&str; TILE_MAX] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", //
    "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", //
    "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", //
    "E", "S", "W", "N", "P", "F", "C",
];

const RED_NAMES: [(&str, usize); 3] = [("5mr", 4), ("5pr", 13), ("5sr", 22)];

/// mjai name of a tile kind ("1m", "E", ...).
pub fn tile_name(kind: usize) -> &'static str {
    TILE_NAMES.get(kind).copied().unwrap_or("?")
}

/// Renders a count vector as space separated mjai names, lowest kind first.
pub fn counts_to_string(counts: &TileCounts) -> String {
    let mut names = Vec::new();
    for (kind, &c) in counts.iter().enumerate() {
        for _ in 0..c.max(0) {
            names.push(tile_name(kind));
        }
    }
    names.join(" ")
}

/// Kind of a single mjai tile name. Red fives fold into plain fives.
pub fn parse_tile(name: &str) -> Result<usize, ShantenError> {
    if let Some(kind) = TILE_NAMES.iter().position(|&n| n == name) {
        return Ok(kind);
    }
    RED_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, kind)| kind)
        .ok_or_else(|| ShantenError::InvalidTile(name.to_string()))
}

// Keeps the physical limit of four copies per kind while a hand is read.
struct TileCounter {
    counts: TileCounts,
}

impl TileCounter {
    fn new() -> Self {
        Self {
            counts: [0; TILE_MAX],
        }
    }

    fn add(&mut self, kind: usize) -> Result<(), ShantenError> {
        if self.counts[kind] >= 4 {
            return Err(ShantenError::TooManyCopies { kind });
        }
        self.counts[kind] += 1;
        Ok(())
    }
}

/// Parses a hand into a count vector.
///
/// Whitespace separated tokens are read as mjai names (`1m 5pr E`); tokens
/// that are not a single mjai name are read in compact notation
/// (`123m406p77z`, `0` is a red five, `1z`-`7z` are the honors).
pub fn parse_hand(text: &str) -> Result<TileCounts, ShantenError> {
    let mut tm = TileCounter::new();
    for token in text.split_whitespace() {
        match parse_tile(token) {
            Ok(kind) => tm.add(kind)?,
            Err(_) => parse_compact(token, &mut tm)?,
        }
    }
    Ok(tm.counts)
}

fn parse_compact(token: &str, tm: &mut TileCounter) -> Result<(), ShantenError> {
    let mut pending_digits: Vec<u32> = Vec::new();

    for c in token.chars() {
        if let Some(d) = c.to_digit(10) {
            pending_digits.push(d);
            continue;
        }
        let suit_offset = match c {
            'm' => 0,
            'p' => 9,
            's' => 18,
            'z' => 27,
            _ => return Err(ShantenError::InvalidTile(c.to_string())),
        };
        for &d in &pending_digits {
            let kind = match (suit_offset, d) {
                (27, 1..=7) => 27 + d as usize - 1,
                (27, _) => return Err(ShantenError::InvalidTile(format!("{}z", d))),
                (_, 0) => suit_offset + 4,
                _ => suit_offset + d as usize - 1,
            };
            tm.add(kind)?;
        }
        pending_digits.clear();
    }

    if !pending_digits.is_empty() {
        let digits: String = pending_digits.iter().map(|d| d.to_string()).collect();
        return Err(ShantenError::PendingDigits(digits));
    }
    Ok(())
}
