use core::fmt;
use std::str::FromStr;

use grid_util::{Point, SimpleValueGrid, ValueGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::error::{MapError, WorldError};
use crate::world::{Action, Direction, GridWorld, GridWorldView, Position, TileStatus};

/// Map symbol marking the robot's starting tile, which is otherwise [TileStatus::Clean].
pub const ROBOT_SYMBOL: char = 'R';

/// An in-memory tile world holding one robot and at most one target. Besides the tile statuses it
/// keeps the [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of
/// traversable tiles in a [UnionFind] structure so that unreachable targets can be reported
/// without searching.
#[derive(Clone, Debug)]
pub struct TileGrid {
    pub tiles: SimpleValueGrid<TileStatus>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    robot: Option<Position>,
    target: Option<Position>,
}

fn to_point(pos: Position) -> Point {
    Point::new(pos.col as i32, pos.row as i32)
}

impl TileGrid {
    /// A grid of `rows` by `cols` tiles all set to `default`, without robot. Components are
    /// generated immediately.
    pub fn new(rows: usize, cols: usize, default: TileStatus) -> TileGrid {
        let mut grid = TileGrid {
            tiles: SimpleValueGrid::new(cols, rows, TileStatus::Clean),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
            robot: None,
            target: None,
        };
        for pos in grid.positions() {
            grid.set_tile(pos, default);
        }
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.tiles.height()
    }

    pub fn cols(&self) -> usize {
        self.tiles.width()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows(), 0..self.cols()).map(|(row, col)| Position::new(row, col))
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn tile(&self, pos: Position) -> Option<TileStatus> {
        if self.in_bounds(pos) {
            Some(self.tiles.get_point(to_point(pos)))
        } else {
            None
        }
    }

    pub fn robot(&self) -> Option<Position> {
        self.robot
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Places the robot. Returns [false] and leaves the robot where it was if `pos` is outside
    /// the grid or impassable.
    pub fn set_robot(&mut self, pos: Position) -> bool {
        if self.tile(pos).is_some_and(|s| s.is_traversable()) {
            self.robot = Some(pos);
            true
        } else {
            false
        }
    }

    /// Updates a tile. Setting [TileStatus::Target] moves the target here, turning the previous
    /// target tile clean. Opening a tile joins it with its open neighbours; blocking a tile may
    /// split a component, so the components are flagged as dirty instead. Positions outside the
    /// grid are ignored.
    pub fn set_tile(&mut self, pos: Position, status: TileStatus) {
        let Some(previous) = self.tile(pos) else {
            debug!("Ignoring tile update outside the grid at {}", pos);
            return;
        };
        if status == TileStatus::Target {
            if let Some(old) = self.target.filter(|&old| old != pos) {
                self.tiles.set_point(to_point(old), TileStatus::Clean);
            }
            self.target = Some(pos);
        } else if previous == TileStatus::Target {
            self.target = None;
        }
        self.tiles.set_point(to_point(pos), status);

        if status.is_traversable() {
            let ix = self.get_ix(pos);
            for n in self.open_neighbours(pos) {
                let n_ix = self.get_ix(n);
                self.components.union(ix, n_ix);
            }
        } else if previous.is_traversable() {
            self.components_dirty = true;
            if self.robot == Some(pos) {
                self.robot = None;
            }
        }
    }

    fn get_ix(&self, pos: Position) -> usize {
        pos.row * self.cols() + pos.col
    }

    fn open_neighbours(&self, pos: Position) -> Vec<Position> {
        self.neighbors(pos)
            .into_iter()
            .filter_map(|(_, n)| n)
            .filter(|n| self.tile(*n).is_some_and(|s| s.is_traversable()))
            .collect()
    }

    /// Retrieves the component id a given [Position] belongs to, or [None] if it lies outside
    /// the grid.
    pub fn get_component(&self, pos: &Position) -> Option<usize> {
        if self.in_bounds(*pos) {
            Some(self.components.find(self.get_ix(*pos)))
        } else {
            None
        }
    }

    /// Checks if start and goal are traversable and on the same component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        let open = |p: &Position| self.tile(*p).is_some_and(|s| s.is_traversable());
        open(start)
            && open(goal)
            && self
                .components
                .equiv(self.get_ix(*start), self.get_ix(*goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open tiles with their open right and
    /// lower neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows() * self.cols());
        self.components_dirty = false;
        let open: Vec<Position> = self
            .positions()
            .filter(|p| self.tile(*p).is_some_and(|s| s.is_traversable()))
            .collect();
        for pos in open {
            let ix = self.get_ix(pos);
            for dir in [Direction::Down, Direction::Right] {
                if let Some(n) = pos
                    .step(dir)
                    .filter(|n| self.tile(*n).is_some_and(|s| s.is_traversable()))
                {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl GridWorldView for TileGrid {
    fn current_position(&self) -> Result<Position, WorldError> {
        self.robot.ok_or(WorldError::NoRobot)
    }

    fn target_position(&self) -> Result<Position, WorldError> {
        self.target.ok_or(WorldError::NoTarget)
    }

    fn tile_status(&self, pos: Position) -> Option<TileStatus> {
        self.tile(pos)
    }
}

impl GridWorld for TileGrid {
    fn apply_action(&mut self, action: Action) {
        let (Some(robot), Some(dir)) = (self.robot, action.direction()) else {
            return;
        };
        match robot.step(dir) {
            Some(next) if self.tile(next).is_some_and(|s| s.is_traversable()) => {
                self.robot = Some(next);
            }
            _ => debug!("Robot at {} bumped into a wall moving {:?}", robot, dir),
        }
    }

    fn reachable(&self, start: &Position, goal: &Position) -> Option<bool> {
        if self.components_dirty {
            None
        } else {
            Some(TileGrid::reachable(self, start, goal))
        }
    }
}

impl FromStr for TileGrid {
    type Err = MapError;

    /// Parses one row per line using `C`, `D`, `W` and `T` for the tile statuses and
    /// [ROBOT_SYMBOL] for the robot start. Without a robot symbol the robot starts on the first
    /// traversable tile in row-major order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let cols = lines.first().ok_or(MapError::Empty)?.chars().count();

        let mut statuses = Vec::with_capacity(lines.len() * cols);
        let mut robot = None;
        let mut target = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let status = if symbol == ROBOT_SYMBOL {
                    if robot.replace(pos).is_some() {
                        return Err(MapError::MultipleRobots);
                    }
                    TileStatus::Clean
                } else {
                    TileStatus::from_symbol(symbol)
                        .ok_or(MapError::UnknownTile { row, col, symbol })?
                };
                if status == TileStatus::Target && target.replace(pos).is_some() {
                    return Err(MapError::MultipleTargets);
                }
                statuses.push((pos, status));
            }
        }
        if target.is_none() {
            return Err(MapError::MissingTarget);
        }

        let mut grid = TileGrid::new(lines.len(), cols, TileStatus::Clean);
        for (pos, status) in statuses {
            grid.set_tile(pos, status);
        }
        grid.update();
        let start = robot
            .or_else(|| {
                grid.positions()
                    .find(|p| grid.tile(*p).is_some_and(|s| s.is_traversable()))
            })
            .ok_or(MapError::NoOpenTile)?;
        grid.set_robot(start);
        Ok(grid)
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line: String = (0..self.cols())
                .map(|col| {
                    let pos = Position::new(row, col);
                    if self.robot == Some(pos) {
                        ROBOT_SYMBOL
                    } else {
                        self.tile(pos).map_or('?', TileStatus::symbol)
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
