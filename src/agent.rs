use crate::error::WorldError;
use crate::planner::astar::AstarPlanner;
use crate::planner::StepPlanner;
use crate::world::{Action, GridWorldView};

/// The agent moving through the world. It keeps no memory between time steps: every decision
/// re-plans from the robot's current position.
#[derive(Clone, Debug, Default)]
pub struct Robot<P = AstarPlanner> {
    planner: P,
}

impl Robot {
    pub fn new() -> Robot {
        Robot::with_planner(AstarPlanner::new())
    }
}

impl<P: StepPlanner> Robot<P> {
    pub fn with_planner(planner: P) -> Robot<P> {
        Robot { planner }
    }

    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Decides the single action for this time step. Fails only when the world cannot tell
    /// where the robot or the target is.
    pub fn decide_action<W: GridWorldView + ?Sized>(
        &self,
        world: &W,
    ) -> Result<Action, WorldError> {
        let start = world.current_position()?;
        let target = world.target_position()?;
        Ok(self.planner.plan(start, target, world))
    }
}
