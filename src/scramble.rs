//! Scramble tokenization and random scramble generation, kept in their own
//! module exactly as the teacher's own `scramble.rs` does, just updated to
//! the tagged `Move` type.

use std::str::FromStr;

use rand::Rng;

use crate::error::Error;
use crate::moves::{Move, ALL_MOVES};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random sequence of `len` turn tokens, with no two consecutive tokens
/// on the same face (otherwise half the scramble would be no-ops once
/// simplified).
pub fn gen_scramble(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(len);
    let mut last_face = None;
    while moves.len() < len {
        let candidate = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        if Some(candidate.face) == last_face {
            continue;
        }
        last_face = Some(candidate.face);
        moves.push(candidate);
    }
    moves
}
