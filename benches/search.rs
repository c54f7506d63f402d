use criterion::{criterion_group, criterion_main, Criterion};
use rusty_chess::board::board::Board;
use rusty_chess::search::SearchEngine;
use std::time::Duration;

fn bench_find_best_move(c: &mut Criterion) {
    c.bench_function("find_best_move/starting_position", |b| {
        b.iter(|| {
            let board = Board::starting_position();
            let mut engine = SearchEngine::new();
            engine.find_best_move(&board, Duration::from_millis(100))
        });
    });
}

criterion_group!(benches, bench_find_best_move);
criterion_main!(benches);
