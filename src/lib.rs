//! # grid_step_planner
//!
//! Decides, one time step at a time, the next move of a robot walking to a target tile on a
//! 4-connected grid. Every decision runs a fresh
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic and keeps
//! only the first step of the shortest path it finds; nothing is cached between steps, so the
//! robot follows changes to the world as soon as they happen.
//!
//! The planner only reads the world through [GridWorldView]. [TileGrid] is an in-memory world
//! that can be parsed from a text map, and [Simulation] advances a [Robot] through any
//! [GridWorld] with a fixed pause between steps and a budget on the number of steps.
//!
//! ```
//! use grid_step_planner::{Action, Robot, TileGrid};
//!
//! let grid: TileGrid = "RCC\nWWC\nTCC".parse().unwrap();
//! assert_eq!(Robot::new().decide_action(&grid), Ok(Action::MoveRight));
//! ```
pub mod agent;
pub mod astar;
pub mod config;
pub mod error;
pub mod planner;
pub mod simulation;
pub mod tile_grid;
pub mod world;

pub use agent::Robot;
pub use config::SimulationConfig;
pub use error::{ConfigError, MapError, WorldError};
pub use planner::{astar::AstarPlanner, dijkstra::DijkstraPlanner, StepPlanner};
pub use simulation::{Outcome, Simulation};
pub use tile_grid::TileGrid;
pub use world::{Action, Direction, GridWorld, GridWorldView, Position, TileStatus};
