//! Per-phase search. Phases 0 and 1 use greedy depth-decreasing descent:
//! at each step, try every move in the phase's turn set (in a fixed order)
//! and take the first one whose resulting coordinate has a strictly lower
//! table depth, stopping once depth 0 (solved-for-this-phase) is reached.
//! Phases 2 and 3 use iterative-deepening DFS, pruning a branch as soon as
//! its coordinate's table depth is absent or already exceeds the budget
//! remaining in the current iteration.

use crate::coord::{phase0_coord, phase1_coord, phase2_coord, phase3_coord};
use crate::error::Error;
use crate::moves::{Move, PHASE0_MOVES, PHASE1_MOVES, PHASE2_MOVES, PHASE3_MOVES};
use crate::state::CubeState;
use crate::tables::PhaseTable;

/// Greedy descent: follow strictly decreasing table depth until 0. Returns
/// `None` if no single move in `moves` decreases depth (the table would
/// have to be corrupt or incomplete for that to happen on a state actually
/// produced by a previous phase, since these tables are exhaustive BFS
/// closures over their own move set).
fn greedy_descend(
    state: &mut CubeState,
    moves: &[Move],
    table: &PhaseTable,
    coord_of: impl Fn(&CubeState) -> u32,
    max_moves: u8,
) -> Result<Vec<Move>, Error> {
    let mut solution = Vec::new();
    let mut depth = table.depth_at(coord_of(state)).ok_or(Error::UnreachableCoordinate)?;

    while depth > 0 {
        if solution.len() as u8 >= max_moves {
            return Err(Error::UnreachableCoordinate);
        }
        let mut advanced = false;
        for &m in moves {
            let mut candidate = *state;
            candidate.apply_turn(m);
            if let Some(d) = table.depth_at(coord_of(&candidate)) {
                if d < depth {
                    *state = candidate;
                    solution.push(m);
                    depth = d;
                    advanced = true;
                    break;
                }
            }
        }
        if !advanced {
            return Err(Error::UnreachableCoordinate);
        }
    }
    Ok(solution)
}

pub fn search_phase0(state: &mut CubeState, table: &PhaseTable) -> Result<Vec<Move>, Error> {
    greedy_descend(state, &PHASE0_MOVES, table, phase0_coord, crate::constants::MAX_DEPTH[0])
}

pub fn search_phase1(state: &mut CubeState, table: &PhaseTable) -> Result<Vec<Move>, Error> {
    greedy_descend(state, &PHASE1_MOVES, table, phase1_coord, crate::constants::MAX_DEPTH[1])
}

/// Iterative-deepening DFS: try successive depth budgets starting at the
/// table's own lower bound for the start coordinate, pruning any branch
/// whose coordinate is absent from the table or whose remaining budget is
/// less than its table depth (an inadmissible move under this phase's
/// generator set).
fn iddfs(
    state: &CubeState,
    moves: &[Move],
    table: &PhaseTable,
    coord_of: impl Fn(&CubeState) -> Option<u32>,
    max_depth: u8,
) -> Result<Vec<Move>, Error> {
    let start_coord = coord_of(state).ok_or(Error::UnreachableCoordinate)?;
    let lower_bound = table.depth_at(start_coord).ok_or(Error::UnreachableCoordinate)?;

    for budget in lower_bound..=max_depth {
        let mut path = Vec::new();
        if dfs_bounded(*state, moves, table, &coord_of, budget, &mut path) {
            return Ok(path);
        }
    }
    Err(Error::UnreachableCoordinate)
}

fn dfs_bounded(
    state: CubeState,
    moves: &[Move],
    table: &PhaseTable,
    coord_of: &impl Fn(&CubeState) -> Option<u32>,
    budget: u8,
    path: &mut Vec<Move>,
) -> bool {
    let coord = match coord_of(&state) {
        Some(c) => c,
        None => return false,
    };
    let depth = match table.depth_at(coord) {
        Some(d) => d,
        None => return false,
    };
    if depth == 0 {
        return true;
    }
    if depth > budget {
        return false;
    }

    for &m in moves {
        if let Some(&last) = path.last() {
            if last.is_same_face(m) {
                continue;
            }
        }
        let mut next = state;
        next.apply_turn(m);
        path.push(m);
        if dfs_bounded(next, moves, table, coord_of, budget - 1, path) {
            return true;
        }
        path.pop();
    }
    false
}

pub fn search_phase2(state: &mut CubeState, table: &PhaseTable) -> Result<Vec<Move>, Error> {
    let path = iddfs(
        state,
        &PHASE2_MOVES,
        table,
        |s| Some(phase2_coord(s)),
        crate::constants::MAX_DEPTH[2],
    )?;
    state.apply_turns(&path);
    Ok(path)
}

pub fn search_phase3(state: &mut CubeState, table: &PhaseTable) -> Result<Vec<Move>, Error> {
    let path = iddfs(
        state,
        &PHASE3_MOVES,
        table,
        |s| phase3_coord(s).ok(),
        crate::constants::MAX_DEPTH[3],
    )?;
    state.apply_turns(&path);
    Ok(path)
}
