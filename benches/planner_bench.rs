use criterion::{criterion_group, criterion_main, Criterion};
use grid_step_planner::{
    AstarPlanner, DijkstraPlanner, Position, StepPlanner, TileGrid, TileStatus,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_GRIDS: usize = 16;

/// Random grids with a 25% wall density whose opposite corners are connected.
fn random_grids(rng: &mut StdRng) -> Vec<TileGrid> {
    let start = Position::new(0, 0);
    let target = Position::new(N - 1, N - 1);
    let mut grids = Vec::new();
    while grids.len() < N_GRIDS {
        let mut grid = TileGrid::new(N, N, TileStatus::Clean);
        for pos in grid.positions().collect::<Vec<_>>() {
            if rng.gen_bool(0.25) {
                grid.set_tile(pos, TileStatus::Impassable);
            }
        }
        grid.set_tile(start, TileStatus::Clean);
        grid.set_tile(target, TileStatus::Target);
        grid.update();
        if grid.reachable(&start, &target) {
            grids.push(grid);
        }
    }
    grids
}

fn bench_planner<P: StepPlanner>(c: &mut Criterion, name: &str, planner: P) {
    let mut rng = StdRng::seed_from_u64(0);
    let grids = random_grids(&mut rng);
    let start = Position::new(0, 0);
    let target = Position::new(N - 1, N - 1);
    c.bench_function(format!("{name}, {N}x{N} single step").as_str(), |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(planner.plan(start, target, grid));
            }
        })
    });
}

fn astar_bench(c: &mut Criterion) {
    bench_planner(c, "Astar", AstarPlanner::new());
}

fn dijkstra_bench(c: &mut Criterion) {
    bench_planner(c, "Dijkstra", DijkstraPlanner);
}

criterion_group!(benches, astar_bench, dijkstra_bench);
criterion_main!(benches);
