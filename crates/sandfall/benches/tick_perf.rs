//! Benchmark: measure tick cost under various grid conditions.
//!
//! Each active benchmark uses `iter_batched` to re-seed the simulation before
//! every iteration so we measure moving sand, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sandfall::{ConflictPolicy, Grid, Initializer, Simulation, SimulationConfig, Universe};

fn config(initializer: Initializer, policy: ConflictPolicy) -> SimulationConfig {
    SimulationConfig {
        width: 256,
        height: 256,
        seed: 7,
        initializer,
        conflict_policy: policy,
        ..SimulationConfig::default()
    }
}

/// Empty grid — baseline cost of scanning 65K cells with nothing to do.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_256x256", |b| {
        let grid = Grid::new(256, 256).unwrap();
        let mut sim = Simulation::new(grid, sandfall::rng::seeded(1), ConflictPolicy::Overwrite);
        b.iter(|| {
            black_box(sim.tick());
        });
    });
}

/// Chaotic fill — roughly half the cells are sources, many hit the tie-break.
fn bench_tick_chaotic(c: &mut Criterion) {
    for (name, policy) in [
        ("tick_chaotic_overwrite_256x256", ConflictPolicy::Overwrite),
        ("tick_chaotic_resolve_256x256", ConflictPolicy::Resolve),
    ] {
        c.bench_function(name, |b| {
            b.iter_batched(
                || Simulation::from_config(&config(Initializer::Chaotic, policy)).unwrap(),
                |mut sim| {
                    black_box(sim.tick());
                    sim
                },
                BatchSize::SmallInput,
            );
        });
    }
}

/// Checkerboard — every interior source is blocked below, so diagonals dominate.
fn bench_tick_checkerboard(c: &mut Criterion) {
    c.bench_function("tick_checkerboard_256x256", |b| {
        b.iter_batched(
            || {
                Simulation::from_config(&config(Initializer::Checkerboard, ConflictPolicy::Overwrite))
                    .unwrap()
            },
            |mut sim| {
                black_box(sim.tick());
                sim
            },
            BatchSize::SmallInput,
        );
    });
}

/// Universe::tick() — what the browser actually calls.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_stripe_256x256", |b| {
        b.iter_batched(
            || Universe::build(&config(Initializer::Stripe, ConflictPolicy::Overwrite)).unwrap(),
            |mut universe| {
                black_box(universe.tick());
                universe
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_chaotic,
    bench_tick_checkerboard,
    bench_universe_tick,
);
criterion_main!(benches);
