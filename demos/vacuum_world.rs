use grid_step_planner::{Simulation, SimulationConfig, TileGrid};
use std::time::Duration;

// A robot (R) crossing a small vacuum world to the target tile (T), where
// - C marks a clean tile
// - D marks a dirty tile
// - W marks a wall
//
// An optional TOML file with ITERATIONS, DELAY and DEBUG can be passed as first argument.
// Log output is controlled by RUST_LOG and defaults to info.

const MAP: &str = "
RCCDCCCC
CWWWWWDC
CDCCCWCC
CWCWCWCW
CCCWTCCC
";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path).unwrap(),
        None => SimulationConfig {
            delay: Duration::from_millis(50),
            ..SimulationConfig::default()
        },
    };
    let grid: TileGrid = MAP.parse().unwrap();
    println!("{}", grid);
    let mut simulation = Simulation::new(grid, config);
    let outcome = simulation.run();
    println!("{}", simulation.world());
    println!("{:?}", outcome);
}
