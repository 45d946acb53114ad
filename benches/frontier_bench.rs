use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{PathSearch, PathingGrid};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;

fn random_grids(n: usize, count: usize) -> Vec<PathingGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let mut grid = PathingGrid::from_obstacles(n, n, |_, _| rng.gen_bool(0.2));
            grid.set(0, 0, false);
            grid.set(n as i32 - 1, n as i32 - 1, false);
            grid
        })
        .collect()
}

fn frontier_bench(c: &mut Criterion) {
    for n in [32, 100] {
        let grids = random_grids(n, 8);
        let start = Point::new(0, 0);
        let goal = Point::new(n as i32 - 1, n as i32 - 1);

        let mut heap_search = PathSearch::new();
        c.bench_function(format!("{n}x{n}, binary heap").as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(heap_search.find(grid, start, goal).ok());
                }
            })
        });

        let mut scan_search = PathSearch::scanning();
        c.bench_function(format!("{n}x{n}, linear scan").as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(scan_search.find(grid, start, goal).ok());
                }
            })
        });
    }
}

criterion_group!(benches, frontier_bench);
criterion_main!(benches);
