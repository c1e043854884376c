//! Cubelet numbering, the face-turn cycle tables, and the phase-coordinate
//! range constants. Cycles are compile-time data, not match-statement
//! branches, per the design note that the per-face cycle structure should
//! be a fixed table `apply_turn` and the coordinate/table-generator code
//! both index into.

use crate::moves::Face;

/// Corner identifiers. Positions and identifiers share this numbering.
pub const UBL: usize = 0;
pub const DFL: usize = 1;
pub const DBR: usize = 2;
pub const UFR: usize = 3;
pub const UFL: usize = 4;
pub const DBL: usize = 5;
pub const DFR: usize = 6;
pub const UBR: usize = 7;

/// Edge identifiers. Positions and identifiers share this numbering.
pub const UL: usize = 0;
pub const DL: usize = 1;
pub const DR: usize = 2;
pub const UR: usize = 3;
pub const BL: usize = 4;
pub const FL: usize = 5;
pub const FR: usize = 6;
pub const BR: usize = 7;
pub const UF: usize = 8;
pub const DF: usize = 9;
pub const DB: usize = 10;
pub const UB: usize = 11;

/// The four-position cycle induced by a clockwise quarter turn of one face,
/// plus the orientation deltas that quarter turn adds (where applicable).
///
/// `corner_twist` and `edge_flip` follow the convention spec'd for this
/// solver: U, D, F, B twist corners; only U, D flip edges. R and L never
/// twist corners and never flip edges.
pub struct FaceCycle {
    pub corners: [usize; 4],
    pub edges: [usize; 4],
    /// Corner-orientation delta added to `corners[i]`'s occupant on a
    /// clockwise quarter turn, or `None` if this face never twists corners.
    pub corner_twist: Option<[u8; 4]>,
    /// Whether a clockwise quarter turn of this face flips the orientation
    /// of the edges it cycles.
    pub edge_flip: bool,
}

pub const fn face_cycle(face: Face) -> FaceCycle {
    match face {
        Face::R => FaceCycle {
            corners: [DBR, DFR, UFR, UBR],
            edges: [UR, BR, DR, FR],
            corner_twist: None,
            edge_flip: false,
        },
        Face::L => FaceCycle {
            corners: [UBL, UFL, DFL, DBL],
            edges: [FL, DL, BL, UL],
            corner_twist: None,
            edge_flip: false,
        },
        Face::U => FaceCycle {
            corners: [UBL, UBR, UFR, UFL],
            edges: [UB, UR, UF, UL],
            corner_twist: Some([2, 1, 2, 1]),
            edge_flip: true,
        },
        Face::D => FaceCycle {
            corners: [DFL, DFR, DBR, DBL],
            edges: [DL, DF, DR, DB],
            corner_twist: Some([2, 1, 2, 1]),
            edge_flip: true,
        },
        Face::F => FaceCycle {
            corners: [UFL, UFR, DFR, DFL],
            edges: [UF, FR, DF, FL],
            corner_twist: Some([2, 1, 2, 1]),
            edge_flip: false,
        },
        Face::B => FaceCycle {
            corners: [DBL, DBR, UBR, UBL],
            edges: [BL, DB, BR, UB],
            corner_twist: Some([2, 1, 2, 1]),
            edge_flip: false,
        },
    }
}

/// The four edges living in the M slice (between L and R): UF, UB, DF, DB.
pub const M_SLICE_EDGES: [usize; 4] = [UF, UB, DF, DB];

/// The four edges living in the E slice (between U and D): FL, FR, BL, BR.
pub const E_SLICE_EDGES: [usize; 4] = [FL, FR, BL, BR];

/// Tetrad A corners, in the order used to build the tetrad-twist coordinate.
pub const TETRAD_A: [usize; 4] = [UFR, UBL, DBR, DFL];
/// Tetrad B corners, in the order used to build the tetrad-twist coordinate.
pub const TETRAD_B: [usize; 4] = [UBR, UFL, DFR, DBL];

pub const N_EDGE_ORIENT: usize = 2048; // 2^11
pub const N_CORNER_ORIENT: usize = 2187; // 3^7
pub const N_M_SLICE: usize = 495; // C(12,4)
pub const N_ES_SLICE: usize = 70; // C(8,4)
pub const N_CORNER_TETRAD: usize = 70; // C(8,4)
pub const N_TETRAD_TWIST: usize = 6;
pub const N_CORNER_PERM: usize = 96; // reachable corner-perm cosets in phase 3
pub const N_EDGE_PERM: usize = 6912; // reachable edge-perm cosets in phase 3

pub const N_PHASE0: usize = N_EDGE_ORIENT;
pub const N_PHASE1: usize = N_CORNER_ORIENT * N_M_SLICE;
pub const N_PHASE2: usize = N_ES_SLICE * N_CORNER_TETRAD * N_TETRAD_TWIST;
pub const N_PHASE3: usize = N_EDGE_PERM * N_CORNER_PERM;

pub const MAX_DEPTH: [u8; 4] = [7, 10, 13, 15];
