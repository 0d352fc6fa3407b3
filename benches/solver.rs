//! Benchmarks for the sliding puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::{Board, SearchConfig, Solver};

/// One of the 3x3 boards furthest from the goal (31 moves).
fn hard_board() -> Board {
    Board::new(&[[8u32, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap()
}

/// A 3x3 board fourteen moves from the goal.
fn easy_board() -> Board {
    Board::new(&[[8u32, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap()
}

/// Benchmark both distance heuristics on a scrambled board.
fn bench_heuristics(c: &mut Criterion) {
    let board = hard_board();

    c.bench_function("manhattan", |b| b.iter(|| black_box(&board).manhattan()));
    c.bench_function("hamming", |b| b.iter(|| black_box(&board).hamming()));
}

/// Benchmark neighbor generation with the blank on an edge.
fn bench_neighbors(c: &mut Criterion) {
    let board = hard_board();

    c.bench_function("neighbors", |b| b.iter(|| black_box(&board).neighbors()));
}

/// Benchmark complete solves. The hard board only finishes promptly with a closed set.
fn bench_solve(c: &mut Criterion) {
    let easy = easy_board();
    c.bench_function("solve_easy", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            Solver::with_config(black_box(&easy), &SearchConfig::default(), &mut rng)
        })
    });

    let hard = hard_board();
    let closed_set = SearchConfig {
        closed_set: true,
        ..SearchConfig::default()
    };
    let mut group = c.benchmark_group("solve_hard");
    group.sample_size(10);
    group.bench_function("closed_set", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            Solver::with_config(black_box(&hard), &closed_set, &mut rng)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_heuristics, bench_neighbors, bench_solve);
criterion_main!(benches);
