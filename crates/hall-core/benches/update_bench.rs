// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Per-Step Update Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hall_core::rhs::heavy_species_rhs;
use hall_core::{update_values, Simulation};
use hall_types::config::SimulationConfig;
use ndarray::Array2;
use std::hint::black_box;

fn config(ncells: usize) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.grid.ncells = ncells;
    config.timestep.dt = 1e-9;
    config
}

fn bench_update_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_values");

    for ncells in [100, 400] {
        group.bench_with_input(BenchmarkId::new("default_xenon", ncells), &ncells, |b, &n| {
            b.iter_batched(
                || Simulation::from_config(&config(n)).expect("valid setup"),
                |mut sim| {
                    update_values(&mut sim.u, &sim.params, &mut sim.cache, sim.t)
                        .expect("update should succeed");
                    black_box(sim.cache.discharge_current);
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_rhs(c: &mut Criterion) {
    let mut sim = Simulation::from_config(&config(200)).expect("valid setup");
    let mut du = Array2::zeros(sim.u.dim());

    c.bench_function("heavy_species_rhs_200", |b| {
        b.iter(|| {
            heavy_species_rhs(&mut du, &sim.u, &sim.params, &mut sim.cache);
            black_box(du[[1, 100]]);
        })
    });
}

fn bench_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    group.bench_function("100_steps_100_cells", |b| {
        b.iter_batched(
            || Simulation::from_config(&config(100)).expect("valid setup"),
            |mut sim| {
                for _ in 0..100 {
                    sim.step().expect("step should succeed");
                }
                black_box(sim.cache.discharge_current);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_update_values, bench_rhs, bench_steps);
criterion_main!(benches);
