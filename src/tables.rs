//! Phase pattern databases: a dense `depth`-by-`coordinate` array per phase,
//! built once by breadth-first search from solved and then either consulted
//! by the search layer or serialized to disk in the wire format spec'd for
//! this solver (distinct from `bincode`'s own `Vec<T>` encoding, so the file
//! on disk stays exactly the self-describing `count` + `(coord, depth)*`
//! pairs format regardless of which serialization crate this binary was
//! built against).

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::constants::{N_PHASE0, N_PHASE1, N_PHASE2, N_PHASE3};
use crate::coord::{phase0_coord, phase1_coord, phase2_coord, phase3_coord};
use crate::error::Error;
use crate::moves::{Move, PHASE0_MOVES, PHASE1_MOVES, PHASE2_MOVES, PHASE3_MOVES};
use crate::state::CubeState;

/// Sentinel for "no table entry recorded at this coordinate."
pub const UNREACHED: u8 = u8::MAX;

/// A dense `coordinate -> depth` table for one phase.
#[derive(Debug, Clone)]
pub struct PhaseTable {
    pub depths: Vec<u8>,
}

impl PhaseTable {
    pub fn depth_at(&self, coord: u32) -> Option<u8> {
        match self.depths.get(coord as usize) {
            Some(&UNREACHED) | None => None,
            Some(&d) => Some(d),
        }
    }

    /// Writes `count` followed by `count` little-endian `(coord, depth)`
    /// pairs (`depth` widened to a `u32` on disk), skipping unreached
    /// coordinates so the file only records what the BFS actually found.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);

        let entries: Vec<(u32, u8)> = self
            .depths
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHED)
            .map(|(coord, &d)| (coord as u32, d))
            .collect();

        w.write_all(&(entries.len() as u32).to_le_bytes())?;
        for (coord, depth) in entries {
            w.write_all(&coord.to_le_bytes())?;
            w.write_all(&(depth as u32).to_le_bytes())?;
        }
        Ok(())
    }

    pub fn read_from(path: &Path, size: usize) -> Result<Self, Error> {
        let file = File::open(path)
            .map_err(|_| Error::TableFileMissing(path.display().to_string()))?;
        let mut r = BufReader::new(file);

        let mut depths = vec![UNREACHED; size];

        let mut count_buf = [0u8; 4];
        r.read_exact(&mut count_buf)
            .map_err(|_| Error::TableFileCorrupt(path.display().to_string()))?;
        let count = u32::from_le_bytes(count_buf);

        for _ in 0..count {
            let mut coord_buf = [0u8; 4];
            let mut depth_buf = [0u8; 4];
            r.read_exact(&mut coord_buf)
                .map_err(|_| Error::TableFileCorrupt(path.display().to_string()))?;
            r.read_exact(&mut depth_buf)
                .map_err(|_| Error::TableFileCorrupt(path.display().to_string()))?;
            let coord = u32::from_le_bytes(coord_buf) as usize;
            let depth = u32::from_le_bytes(depth_buf) as u8;
            if coord >= size {
                return Err(Error::TableFileCorrupt(path.display().to_string()));
            }
            depths[coord] = depth;
        }
        Ok(PhaseTable { depths })
    }

    /// An all-`UNREACHED` table of the given size, returned when a table
    /// file is missing so the caller can keep running in a degraded mode
    /// (see `solver::Solver::new`).
    pub fn empty(size: usize) -> Self {
        PhaseTable {
            depths: vec![UNREACHED; size],
        }
    }
}

fn build_table(
    size: usize,
    moves: &[Move],
    coord_of: impl Fn(&CubeState) -> u32,
    label: &str,
) -> PhaseTable {
    let mut depths = vec![UNREACHED; size];
    let solved = CubeState::new_solved();
    depths[coord_of(&solved) as usize] = 0;

    let mut frontier = vec![solved];
    let mut depth = 0u8;
    let mut visited = 1usize;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for state in frontier {
            for &m in moves {
                let mut neighbor = state;
                neighbor.apply_turn(m);
                let coord = coord_of(&neighbor) as usize;
                if depths[coord] == UNREACHED {
                    depths[coord] = depth + 1;
                    visited += 1;
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
        depth += 1;
        println!("{label}: depth {depth}, {visited}/{size} coordinates reached");
    }

    PhaseTable { depths }
}

pub fn build_phase0_table() -> PhaseTable {
    build_table(N_PHASE0, &PHASE0_MOVES, phase0_coord, "phase0")
}

pub fn build_phase1_table() -> PhaseTable {
    build_table(N_PHASE1, &PHASE1_MOVES, phase1_coord, "phase1")
}

pub fn build_phase2_table() -> PhaseTable {
    build_table(N_PHASE2, &PHASE2_MOVES, phase2_coord, "phase2")
}

/// Phase 3's coordinate can fail (`phase3_coord` returns `Result`), but
/// every state this BFS visits is reachable by construction (it only ever
/// applies `PHASE3_MOVES` starting from solved), so the lookup always
/// succeeds here.
pub fn build_phase3_table() -> PhaseTable {
    let mut depths = vec![UNREACHED; N_PHASE3];
    let solved = CubeState::new_solved();
    let solved_coord = phase3_coord(&solved).expect("solved state is always reachable") as usize;
    depths[solved_coord] = 0;

    let mut frontier = vec![solved];
    let mut depth = 0u8;
    let mut visited = 1usize;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for state in frontier {
            for &m in PHASE3_MOVES.iter() {
                let mut neighbor = state;
                neighbor.apply_turn(m);
                let coord = phase3_coord(&neighbor)
                    .expect("phase3 BFS only visits phase3-reachable states") as usize;
                if depths[coord] == UNREACHED {
                    depths[coord] = depth + 1;
                    visited += 1;
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
        depth += 1;
        println!("phase3: depth {depth}, {visited}/{N_PHASE3} coordinates reached");
    }

    PhaseTable { depths }
}

/// Builds all four phase tables and writes them to `<table_dir>/phaseN.tbl`.
pub fn generate_all_tables(table_dir: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(table_dir)?;

    println!("generating phase 0 table ({N_PHASE0} coordinates)...");
    build_phase0_table().write_to(&table_dir.join("phase0.tbl"))?;

    println!("generating phase 1 table ({N_PHASE1} coordinates)...");
    build_phase1_table().write_to(&table_dir.join("phase1.tbl"))?;

    println!("generating phase 2 table ({N_PHASE2} coordinates)...");
    build_phase2_table().write_to(&table_dir.join("phase2.tbl"))?;

    println!("generating phase 3 table ({N_PHASE3} coordinates)...");
    build_phase3_table().write_to(&table_dir.join("phase3.tbl"))?;

    Ok(())
}
