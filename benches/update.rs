//! Benchmarks for the Life update step.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use toroidal_life::compute::{Simulation, count_neighbors, random_grid_with_seed, update};

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for size in [50, 75, 128, 256, 512] {
        let grid = random_grid_with_seed(size, 0.2, Some(42)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &grid,
            |b, grid| {
                b.iter(|| update(black_box(grid)));
            },
        );
    }

    group.finish();
}

fn bench_count_neighbors(c: &mut Criterion) {
    let grid = random_grid_with_seed(128, 0.2, Some(7)).unwrap();

    c.bench_function("count_neighbors_edge", |b| {
        b.iter(|| count_neighbors(black_box(&grid), black_box(0), black_box(0)));
    });
}

fn bench_snapshot_interval(c: &mut Criterion) {
    // One batch snapshot interval without I/O.
    let grid = random_grid_with_seed(50, 0.2, Some(1)).unwrap();

    c.bench_function("run_50_generations_50x50", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(grid.clone());
            sim.run(50);
            black_box(sim.generation())
        });
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_count_neighbors,
    bench_snapshot_interval
);
criterion_main!(benches);
