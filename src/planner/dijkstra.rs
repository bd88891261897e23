use crate::planner::StepPlanner;
use crate::world::Position;

/// Uniform-cost search. Expands more nodes than [AstarPlanner](super::astar::AstarPlanner) but
/// needs no heuristic, which makes it a reference for path lengths.
#[derive(Clone, Debug, Default)]
pub struct DijkstraPlanner;

impl StepPlanner for DijkstraPlanner {
    fn heuristic(&self, _: &Position, _: &Position) -> u32 {
        0
    }
}
