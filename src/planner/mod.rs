use crate::astar::{astar, SearchTree};
use crate::world::{Action, GridWorldView, Position};
use log::debug;

pub mod astar;
pub mod dijkstra;

/// Every move on the grid costs one step.
pub const STEP_COST: u32 = 1;

/// A planner that searches the grid afresh on every call and turns the shortest path it finds
/// into a single [Action]. Implementors only choose the heuristic.
pub trait StepPlanner {
    fn heuristic(&self, pos: &Position, target: &Position) -> u32;

    /// Traversable grid-adjacent positions of `pos`. Absent neighbours and impassable tiles are
    /// skipped.
    fn successors<W: GridWorldView + ?Sized>(
        &self,
        world: &W,
        pos: &Position,
    ) -> Vec<(Position, u32)> {
        world
            .neighbors(*pos)
            .into_iter()
            .filter_map(|(_, neighbor)| neighbor)
            .filter(|n| world.tile_status(*n).is_some_and(|s| s.is_traversable()))
            .map(|n| (n, STEP_COST))
            .collect()
    }

    /// Runs the search from `start` to `target`. [None] if no path exists.
    fn search<W: GridWorldView + ?Sized>(
        &self,
        start: Position,
        target: Position,
        world: &W,
    ) -> Option<SearchTree<Position, u32>> {
        astar(
            &start,
            |node| self.successors(world, node),
            |node| self.heuristic(node, &target),
            |node| *node == target,
        )
    }

    /// The full shortest path from `start` to `target`, both included.
    fn plan_path<W: GridWorldView + ?Sized>(
        &self,
        start: Position,
        target: Position,
        world: &W,
    ) -> Option<Vec<Position>> {
        self.search(start, target, world).map(|tree| tree.path())
    }

    /// The first move along a shortest path from `start` to `target`, or [Action::DoNothing]
    /// when already there or when the target cannot be reached.
    fn plan<W: GridWorldView + ?Sized>(
        &self,
        start: Position,
        target: Position,
        world: &W,
    ) -> Action {
        if start == target {
            return Action::DoNothing;
        }
        match self.search(start, target, world) {
            Some(tree) => first_action(&start, &tree),
            None => {
                debug!("No path from {} to {}", start, target);
                Action::DoNothing
            }
        }
    }
}

/// Maps the first step of the path held in `tree` onto the move leading there from `start`.
pub fn first_action(start: &Position, tree: &SearchTree<Position, u32>) -> Action {
    tree.first_step()
        .and_then(|next| start.dir_to(next))
        .into()
}
