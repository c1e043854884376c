//! Turn tokens, modeled as a tagged value rather than as strings: a `Face`
//! enum crossed with a `Variant` enum, with parsing/formatting isolated at
//! the string boundary. This replaces the "stringly typed" turn token the
//! distilled spec describes with the sum-type `kociemba`'s own `Move` enum
//! already favors, generalized here to a `(face, variant)` pair so the
//! per-face cycle data (`constants::face_cycle`) is keyed by `Face` alone.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    F,
    B,
    R,
    L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Quarter,
    Inverse,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub variant: Variant,
}

impl Move {
    pub const fn new(face: Face, variant: Variant) -> Self {
        Move { face, variant }
    }

    pub fn is_same_face(&self, other: Move) -> bool {
        self.face == other.face
    }

    /// `1` for a clockwise quarter turn, `2` for a half turn, `3` for the
    /// inverse quarter turn (so that two turns on the same face compose by
    /// adding these values mod 4).
    pub fn value(&self) -> u8 {
        match self.variant {
            Variant::Quarter => 1,
            Variant::Half => 2,
            Variant::Inverse => 3,
        }
    }

    /// The inverse turn of `self`.
    pub fn inverse(&self) -> Self {
        let variant = match self.variant {
            Variant::Quarter => Variant::Inverse,
            Variant::Inverse => Variant::Quarter,
            Variant::Half => Variant::Half,
        };
        Move::new(self.face, variant)
    }

    /// Reconstruct a turn on `face` from a combined value mod 4, or `None`
    /// if the combined turns cancel out entirely (value 0).
    pub fn from_face_value(face: Face, value: u8) -> Option<Move> {
        match value % 4 {
            0 => None,
            1 => Some(Move::new(face, Variant::Quarter)),
            2 => Some(Move::new(face, Variant::Half)),
            3 => Some(Move::new(face, Variant::Inverse)),
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self.face {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        };
        match self.variant {
            Variant::Quarter => write!(f, "{face}"),
            Variant::Inverse => write!(f, "{face}'"),
            Variant::Half => write!(f, "{face}2"),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some('U') => Face::U,
            Some('D') => Face::D,
            Some('F') => Face::F,
            Some('B') => Face::B,
            Some('R') => Face::R,
            Some('L') => Face::L,
            _ => return Err(Error::InvalidToken(s.to_string())),
        };
        let variant = match chars.next() {
            None => Variant::Quarter,
            Some('\'') => Variant::Inverse,
            Some('2') => Variant::Half,
            _ => return Err(Error::InvalidToken(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(Error::InvalidToken(s.to_string()));
        }
        Ok(Move::new(face, variant))
    }
}

macro_rules! mv {
    ($face:ident, Quarter) => {
        Move::new(Face::$face, Variant::Quarter)
    };
    ($face:ident, Inverse) => {
        Move::new(Face::$face, Variant::Inverse)
    };
    ($face:ident, Half) => {
        Move::new(Face::$face, Variant::Half)
    };
}

/// All 18 turn tokens, `R,R',R2,L,L',L2,U,U',U2,D,D',D2,F,F',F2,B,B',B2`.
pub const ALL_MOVES: [Move; 18] = [
    mv!(R, Quarter),
    mv!(R, Inverse),
    mv!(R, Half),
    mv!(L, Quarter),
    mv!(L, Inverse),
    mv!(L, Half),
    mv!(U, Quarter),
    mv!(U, Inverse),
    mv!(U, Half),
    mv!(D, Quarter),
    mv!(D, Inverse),
    mv!(D, Half),
    mv!(F, Quarter),
    mv!(F, Inverse),
    mv!(F, Half),
    mv!(B, Quarter),
    mv!(B, Inverse),
    mv!(B, Half),
];

/// Phase 0: all 18 moves.
pub const PHASE0_MOVES: [Move; 18] = ALL_MOVES;

/// Phase 1: `R,R',R2,L,L',L2,U2,D2,F,F',F2,B,B',B2` (14 moves).
pub const PHASE1_MOVES: [Move; 14] = [
    mv!(R, Quarter),
    mv!(R, Inverse),
    mv!(R, Half),
    mv!(L, Quarter),
    mv!(L, Inverse),
    mv!(L, Half),
    mv!(U, Half),
    mv!(D, Half),
    mv!(F, Quarter),
    mv!(F, Inverse),
    mv!(F, Half),
    mv!(B, Quarter),
    mv!(B, Inverse),
    mv!(B, Half),
];

/// Phase 2: `R,R',R2,L,L',L2,U2,D2,F2,B2` (10 moves).
pub const PHASE2_MOVES: [Move; 10] = [
    mv!(R, Quarter),
    mv!(R, Inverse),
    mv!(R, Half),
    mv!(L, Quarter),
    mv!(L, Inverse),
    mv!(L, Half),
    mv!(U, Half),
    mv!(D, Half),
    mv!(F, Half),
    mv!(B, Half),
];

/// Phase 3: `R2,L2,U2,D2,F2,B2` (6 moves).
pub const PHASE3_MOVES: [Move; 6] = [
    mv!(R, Half),
    mv!(L, Half),
    mv!(U, Half),
    mv!(D, Half),
    mv!(F, Half),
    mv!(B, Half),
];
