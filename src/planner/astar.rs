use crate::planner::StepPlanner;
use crate::world::Position;

/// A* with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
/// heuristic. It never overestimates on a 4-connected unit-cost grid, so every returned move
/// lies on a shortest path.
///
/// Among frontier nodes with equal estimated total cost the one with the larger cost so far is
/// expanded first, then the one with the lower row, then the lower column.
#[derive(Clone, Debug, Default)]
pub struct AstarPlanner;

impl AstarPlanner {
    pub fn new() -> AstarPlanner {
        AstarPlanner
    }
}

impl StepPlanner for AstarPlanner {
    fn heuristic(&self, pos: &Position, target: &Position) -> u32 {
        u32::try_from(pos.manhattan_distance(target)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_grid::TileGrid;
    use crate::world::{Action, GridWorld, GridWorldView, TileStatus};
    use std::cell::Cell;

    fn open_grid(rows: usize, cols: usize) -> TileGrid {
        TileGrid::new(rows, cols, TileStatus::Clean)
    }

    /// Repeatedly plans and applies moves, returning the actions taken until the planner
    /// stops moving.
    fn follow(planner: &AstarPlanner, grid: &mut TileGrid, limit: usize) -> Vec<Action> {
        let mut actions = Vec::new();
        for _ in 0..limit {
            let start = grid.current_position().unwrap();
            let target = grid.target_position().unwrap();
            let action = planner.plan(start, target, &*grid);
            if action == Action::DoNothing {
                break;
            }
            grid.apply_action(action);
            actions.push(action);
        }
        actions
    }

    /// Counts tile lookups to observe whether a search took place.
    struct CountingView<'a> {
        grid: &'a TileGrid,
        lookups: Cell<usize>,
    }

    impl GridWorldView for CountingView<'_> {
        fn current_position(&self) -> Result<Position, crate::WorldError> {
            self.grid.current_position()
        }
        fn target_position(&self) -> Result<Position, crate::WorldError> {
            self.grid.target_position()
        }
        fn tile_status(&self, pos: Position) -> Option<TileStatus> {
            self.lookups.set(self.lookups.get() + 1);
            self.grid.tile_status(pos)
        }
    }

    #[test]
    fn already_at_target() {
        let grid = open_grid(3, 3);
        let view = CountingView {
            grid: &grid,
            lookups: Cell::new(0),
        };
        let p = Position::new(1, 1);
        assert_eq!(AstarPlanner::new().plan(p, p, &view), Action::DoNothing);
        assert_eq!(view.lookups.get(), 0);
    }

    /// 3x3 open grid from the top left to the bottom right corner. Ties resolve towards the
    /// lower row, so the robot first walks along the top row.
    #[test]
    fn open_square() {
        let mut grid = open_grid(3, 3);
        grid.set_tile(Position::new(2, 2), TileStatus::Target);
        grid.set_robot(Position::new(0, 0));
        let planner = AstarPlanner::new();
        let actions = follow(&planner, &mut grid, 10);
        assert_eq!(
            actions,
            vec![
                Action::MoveRight,
                Action::MoveRight,
                Action::MoveDown,
                Action::MoveDown
            ]
        );
        assert!(grid.goal_condition_met());
    }

    #[test]
    fn blocked_corridor() {
        let mut grid = open_grid(3, 1);
        grid.set_tile(Position::new(1, 0), TileStatus::Impassable);
        grid.set_tile(Position::new(2, 0), TileStatus::Target);
        let planner = AstarPlanner::new();
        assert_eq!(
            planner.plan(Position::new(0, 0), Position::new(2, 0), &grid),
            Action::DoNothing
        );
        assert!(planner
            .plan_path(Position::new(0, 0), Position::new(2, 0), &grid)
            .is_none());
    }

    #[test]
    fn straight_corridor() {
        let mut grid = open_grid(1, 4);
        grid.set_tile(Position::new(0, 3), TileStatus::Target);
        grid.set_robot(Position::new(0, 0));
        let planner = AstarPlanner::new();
        let actions = follow(&planner, &mut grid, 10);
        assert_eq!(actions, vec![Action::MoveRight; 3]);
        let here = grid.current_position().unwrap();
        assert_eq!(here, Position::new(0, 3));
        assert_eq!(planner.plan(here, here, &grid), Action::DoNothing);
    }

    #[test]
    fn walks_around_wall() {
        // C C C
        // W W C
        // T C C
        let mut grid: TileGrid = "RCC\nWWC\nTCC".parse().unwrap();
        let planner = AstarPlanner::new();
        let path = planner
            .plan_path(Position::new(0, 0), Position::new(2, 0), &grid)
            .unwrap();
        assert_eq!(path.len(), 7);
        let actions = follow(&planner, &mut grid, 20);
        assert_eq!(actions.len(), 6);
        assert!(grid.goal_condition_met());
    }

    #[test]
    fn enclosed_target_never_moves() {
        let mut grid: TileGrid = "RCCCC\nCCWCC\nCWTWC\nCCWCC".parse().unwrap();
        let planner = AstarPlanner::new();
        for _ in 0..5 {
            let start = grid.current_position().unwrap();
            let target = grid.target_position().unwrap();
            let action = planner.plan(start, target, &grid);
            assert_eq!(action, Action::DoNothing);
            grid.apply_action(action);
        }
        assert_eq!(grid.current_position(), Ok(Position::new(0, 0)));
    }

    #[test]
    fn repeated_calls_agree() {
        let grid: TileGrid = "RCCDC\nCWCWC\nCCDCC\nDWCWT".parse().unwrap();
        let planner = AstarPlanner::new();
        let start = grid.current_position().unwrap();
        let target = grid.target_position().unwrap();
        let first = planner.plan(start, target, &grid);
        for _ in 0..10 {
            assert_eq!(planner.plan(start, target, &grid), first);
        }
    }

    #[test]
    fn open_grid_steps_equal_manhattan_distance() {
        let planner = AstarPlanner::new();
        for (start, target) in [
            (Position::new(0, 0), Position::new(4, 5)),
            (Position::new(4, 5), Position::new(0, 0)),
            (Position::new(3, 0), Position::new(0, 4)),
            (Position::new(2, 2), Position::new(2, 2)),
        ] {
            let mut grid = open_grid(5, 6);
            grid.set_tile(target, TileStatus::Target);
            grid.set_robot(start);
            let actions = follow(&planner, &mut grid, 50);
            assert_eq!(actions.len(), start.manhattan_distance(&target));
            assert!(grid.goal_condition_met());
        }
    }

    #[test]
    fn heuristic_saturates_on_huge_distances() {
        let planner = AstarPlanner::new();
        assert_eq!(
            planner.heuristic(&Position::new(1, 2), &Position::new(4, 0)),
            5
        );
        assert_eq!(
            planner.heuristic(&Position::new(0, 0), &Position::new(usize::MAX, 0)),
            u32::MAX
        );
        assert_eq!(
            planner.heuristic(&Position::new(0, usize::MAX), &Position::new(0, 0)),
            u32::MAX
        );
    }
}
