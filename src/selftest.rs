//! Self-test harness: run the solver over a directory of fixture scrambles
//! plus a batch of freshly generated random scrambles, and report back a
//! small structured summary, the same shape the teacher favors for its own
//! `SoutionResult` rather than printing ad hoc text to stdout. The report
//! derives both `serde::Serialize` (for embedders that want JSON/etc.) and
//! `bincode::Encode`/`Decode` (for the teacher's own preferred wire format,
//! via the same `encode_to_vec`/`decode_from_slice` + standard config the
//! teacher's `write_table`/`decode_table` helpers use for pruning tables).

use std::fs;
use std::path::Path;
use std::time::Instant;

use bincode::config::{self, Configuration};
use bincode::{Decode, Encode};
use rand::rngs::ThreadRng;
use serde::Serialize;

use crate::error::Error;
use crate::scramble::{gen_scramble, scramble_from_str};
use crate::solver::Solver;
use crate::state::CubeState;

const RANDOM_SCRAMBLE_COUNT: usize = 9;
const RANDOM_SCRAMBLE_LEN: usize = 50;
const BINCODE_CONFIG: Configuration = config::standard();

#[derive(Debug, Clone, Serialize, Encode, Decode)]
pub struct ScrambleResult {
    pub label: String,
    pub solved: bool,
    pub move_count: usize,
    pub wall_time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Encode, Decode)]
pub struct SelfTestReport {
    pub results: Vec<ScrambleResult>,
    pub all_solved: bool,
    pub best_move_count: usize,
    pub worst_move_count: usize,
    pub average_move_count: f64,
    pub best_wall_time_ms: f64,
    pub worst_wall_time_ms: f64,
    pub average_wall_time_ms: f64,
}

impl SelfTestReport {
    /// Encodes this report with `bincode`, the teacher's own wire format
    /// for structured data, for embedders that want to ship a self-test
    /// result over a byte channel rather than print it.
    pub fn to_bincode(&self) -> Result<Vec<u8>, Error> {
        Ok(bincode::encode_to_vec(self, BINCODE_CONFIG)?)
    }

    pub fn from_bincode(bytes: &[u8]) -> Result<Self, Error> {
        let (report, _) = bincode::decode_from_slice(bytes, BINCODE_CONFIG)?;
        Ok(report)
    }

    fn from_results(results: Vec<ScrambleResult>) -> Self {
        let all_solved = results.iter().all(|r| r.solved);
        let move_counts: Vec<usize> = results.iter().map(|r| r.move_count).collect();
        let wall_times: Vec<f64> = results.iter().map(|r| r.wall_time_ms).collect();

        let best_move_count = move_counts.iter().copied().min().unwrap_or(0);
        let worst_move_count = move_counts.iter().copied().max().unwrap_or(0);
        let average_move_count = if move_counts.is_empty() {
            0.0
        } else {
            move_counts.iter().sum::<usize>() as f64 / move_counts.len() as f64
        };

        let best_wall_time_ms = wall_times.iter().cloned().fold(f64::INFINITY, f64::min);
        let worst_wall_time_ms = wall_times.iter().cloned().fold(0.0, f64::max);
        let average_wall_time_ms = if wall_times.is_empty() {
            0.0
        } else {
            wall_times.iter().sum::<f64>() / wall_times.len() as f64
        };

        SelfTestReport {
            results,
            all_solved,
            best_move_count,
            worst_move_count,
            average_move_count,
            best_wall_time_ms: if best_wall_time_ms.is_finite() { best_wall_time_ms } else { 0.0 },
            worst_wall_time_ms,
            average_wall_time_ms,
        }
    }
}

fn run_one(label: String, scramble: &[crate::moves::Move], solver: &Solver) -> ScrambleResult {
    let mut state = CubeState::new_solved();
    state.apply_turns(scramble);

    let started = Instant::now();
    let solution = solver.solve(&state);
    let wall_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    state.apply_turns(&solution);

    ScrambleResult {
        label,
        solved: state.is_solved(),
        move_count: solution.len(),
        wall_time_ms,
    }
}

/// Runs the solver against every scramble file in `scramble_dir` (one
/// whitespace-token scramble per file) plus `RANDOM_SCRAMBLE_COUNT` freshly
/// generated random scrambles, and summarizes the results.
pub fn run_self_tests(table_dir: &Path, scramble_dir: &Path) -> Result<SelfTestReport, Error> {
    let solver = Solver::new(table_dir);
    let mut results = Vec::new();

    if scramble_dir.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(scramble_dir)?.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());
        for entry in entries {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            let scramble = scramble_from_str(&contents)?;
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "<unnamed>".to_string());
            results.push(run_one(label, &scramble, &solver));
        }
    }

    let mut rng: ThreadRng = rand::thread_rng();
    for i in 0..RANDOM_SCRAMBLE_COUNT {
        let scramble = gen_scramble(&mut rng, RANDOM_SCRAMBLE_LEN);
        results.push(run_one(format!("random-{i}"), &scramble, &solver));
    }

    Ok(SelfTestReport::from_results(results))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_aggregates_are_consistent_with_results() {
        let results = vec![
            ScrambleResult { label: "a".into(), solved: true, move_count: 10, wall_time_ms: 5.0 },
            ScrambleResult { label: "b".into(), solved: true, move_count: 20, wall_time_ms: 15.0 },
        ];
        let report = SelfTestReport::from_results(results);
        assert!(report.all_solved);
        assert_eq!(report.best_move_count, 10);
        assert_eq!(report.worst_move_count, 20);
        assert_eq!(report.average_move_count, 15.0);
        assert_eq!(report.best_wall_time_ms, 5.0);
        assert_eq!(report.worst_wall_time_ms, 15.0);
    }

    #[test]
    fn report_flags_any_unsolved_result() {
        let results = vec![
            ScrambleResult { label: "a".into(), solved: true, move_count: 10, wall_time_ms: 5.0 },
            ScrambleResult { label: "b".into(), solved: false, move_count: 0, wall_time_ms: 1.0 },
        ];
        let report = SelfTestReport::from_results(results);
        assert!(!report.all_solved);
    }

    #[test]
    fn report_round_trips_through_bincode() {
        let results = vec![
            ScrambleResult { label: "a".into(), solved: true, move_count: 10, wall_time_ms: 5.0 },
            ScrambleResult { label: "b".into(), solved: false, move_count: 0, wall_time_ms: 1.0 },
        ];
        let report = SelfTestReport::from_results(results);
        let bytes = report.to_bincode().unwrap();
        let decoded = SelfTestReport::from_bincode(&bytes).unwrap();
        assert_eq!(decoded.all_solved, report.all_solved);
        assert_eq!(decoded.results.len(), report.results.len());
        assert_eq!(decoded.average_move_count, report.average_move_count);
    }
}
