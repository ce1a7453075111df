// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the divider constraint solver.
//!
//! The solver runs on every pointer-move event during a drag, so its cost
//! bounds interaction latency.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wipedeck::domain::slider::{apply_move, initial_positions, Constraints};

fn bench_apply_move(c: &mut Criterion) {
    let constraints = Constraints::default();
    let mut group = c.benchmark_group("apply_move");

    for layer_count in [2usize, 4, 8, 16] {
        let positions = initial_positions(layer_count);
        group.bench_with_input(
            BenchmarkId::new("drag_to_edge", layer_count),
            &positions,
            |b, positions| {
                b.iter(|| {
                    apply_move(
                        black_box(positions),
                        black_box(0),
                        black_box(100.0),
                        constraints,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_no_push_move(c: &mut Criterion) {
    let constraints = Constraints::default();
    let positions = initial_positions(8);

    c.bench_function("apply_move/no_push", |b| {
        b.iter(|| {
            apply_move(
                black_box(&positions),
                black_box(3),
                black_box(45.0),
                constraints,
            )
        });
    });
}

criterion_group!(benches, bench_apply_move, bench_no_push_move);
criterion_main!(benches);
