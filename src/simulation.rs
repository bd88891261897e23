use std::thread;

use log::{error, info, warn};

use crate::agent::Robot;
use crate::config::SimulationConfig;
use crate::planner::astar::AstarPlanner;
use crate::planner::StepPlanner;
use crate::world::{Action, GridWorld};

/// How a [Simulation::run] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    GoalReached { steps: usize },
    BudgetExhausted { steps: usize },
}

/// Drives a [Robot] through a world one time step at a time, with a fixed pause between steps
/// and a budget on the number of steps.
#[derive(Clone, Debug)]
pub struct Simulation<W, P = AstarPlanner> {
    world: W,
    robot: Robot<P>,
    config: SimulationConfig,
    time_step: usize,
}

impl<W: GridWorld> Simulation<W> {
    pub fn new(world: W, config: SimulationConfig) -> Simulation<W> {
        Simulation::with_robot(world, Robot::new(), config)
    }
}

impl<W: GridWorld, P: StepPlanner> Simulation<W, P> {
    pub fn with_robot(world: W, robot: Robot<P>, config: SimulationConfig) -> Simulation<W, P> {
        Simulation {
            world,
            robot,
            config,
            time_step: 0,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    /// Number of time steps taken so far.
    pub fn time_step(&self) -> usize {
        self.time_step
    }

    /// Advances one time step and returns the action that was applied. If the robot cannot
    /// decide, the step is spent doing nothing.
    pub fn step(&mut self) -> Action {
        let action = match self.robot.decide_action(&self.world) {
            Ok(action) => action,
            Err(err) => {
                if self.config.debug {
                    error!("Agent crash at time step {:03}: {}", self.time_step, err);
                }
                Action::DoNothing
            }
        };
        self.world.apply_action(action);
        self.time_step += 1;
        action
    }

    /// Steps until the goal condition is met or the step budget is spent, pausing for the
    /// configured delay between steps.
    pub fn run(&mut self) -> Outcome {
        info!(
            "Starting simulation with a budget of {} steps",
            self.config.iterations
        );
        if let (Ok(start), Ok(target)) = (
            self.world.current_position(),
            self.world.target_position(),
        ) {
            if self.world.reachable(&start, &target) == Some(false) {
                warn!("Target {} is not reachable from {}", target, start);
            }
        }
        while self.time_step < self.config.iterations {
            self.step();
            if self.world.goal_condition_met() {
                info!("Goal condition was met in {:02} steps!", self.time_step);
                return Outcome::GoalReached {
                    steps: self.time_step,
                };
            }
            if self.time_step < self.config.iterations && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }
        info!(
            "Goal condition was not met after {:02} steps...",
            self.time_step
        );
        Outcome::BudgetExhausted {
            steps: self.time_step,
        }
    }
}
