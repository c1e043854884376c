use criterion::{criterion_group, criterion_main, Criterion};

use thistlethwaite::moves::{Face, Move, Variant};
use thistlethwaite::scramble::scramble_from_str;
use thistlethwaite::tables::{build_phase0_table, build_phase1_table, build_phase2_table, build_phase3_table};
use thistlethwaite::{CubeState, Solver};

const SCRAMBLE: &str = "R U R' U' F L' D' B2 R' U' R U R' U R U2 R' L F' D R2 U' B \
                         L2 D' F2 R U2 L' B' D2 R' F U L D' B2 R2 U' F' L U2 D R' B";

fn apply_turn() {
    let mut state = CubeState::new_solved();
    state.apply_turn(Move::new(Face::R, Variant::Quarter));
}

fn apply_turns() {
    let moves = scramble_from_str(SCRAMBLE).unwrap();
    let mut state = CubeState::new_solved();
    state.apply_turns(&moves);
}

fn bench_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubeState");
    group.bench_function("apply_turn", |b| b.iter(apply_turn));
    group.bench_function("apply_turns", |b| b.iter(apply_turns));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let solver = Solver::from_tables(
        build_phase0_table(),
        build_phase1_table(),
        build_phase2_table(),
        build_phase3_table(),
    );
    let moves = scramble_from_str(SCRAMBLE).unwrap();
    let mut state = CubeState::new_solved();
    state.apply_turns(&moves);

    c.bench_function("Solver::solve", |b| b.iter(|| solver.solve(&state)));
}

criterion_group!(benches, bench_solver, bench_state);
criterion_main!(benches);
