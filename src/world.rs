use core::fmt;

use crate::error::WorldError;

/// A grid cell identified by its row and column. Ordering is by row, then column, which is
/// also the final tie-break of the search frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// The adjacent position in the given direction, or [None] when it would leave the
    /// non-negative quadrant.
    pub fn step(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
            Direction::Down => Some(Position::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
            Direction::Right => Some(Position::new(self.row, self.col + 1)),
        }
    }

    /// Number of unit steps on a 4-connected grid without obstacles.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The direction of a single step from `self` to `next`, compared row first. Returns [None]
    /// for identical positions.
    pub fn dir_to(&self, next: &Position) -> Option<Direction> {
        if next.row < self.row {
            Some(Direction::Up)
        } else if next.row > self.row {
            Some(Direction::Down)
        } else if next.col < self.col {
            Some(Direction::Left)
        } else if next.col > self.col {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions. Diagonal moves do not exist on this grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed order in which neighbours are reported.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileStatus {
    #[default]
    Clean,
    Dirty,
    Impassable,
    Target,
}

impl TileStatus {
    pub fn is_traversable(self) -> bool {
        self != TileStatus::Impassable
    }

    pub fn symbol(self) -> char {
        match self {
            TileStatus::Clean => 'C',
            TileStatus::Dirty => 'D',
            TileStatus::Impassable => 'W',
            TileStatus::Target => 'T',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<TileStatus> {
        match symbol {
            'C' => Some(TileStatus::Clean),
            'D' => Some(TileStatus::Dirty),
            'W' => Some(TileStatus::Impassable),
            'T' => Some(TileStatus::Target),
            _ => None,
        }
    }
}

/// A single discrete move, or no move at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    DoNothing,
}

impl Action {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            Action::MoveLeft => Some(Direction::Left),
            Action::MoveRight => Some(Direction::Right),
            Action::DoNothing => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(dir: Direction) -> Action {
        match dir {
            Direction::Up => Action::MoveUp,
            Direction::Down => Action::MoveDown,
            Direction::Left => Action::MoveLeft,
            Direction::Right => Action::MoveRight,
        }
    }
}

impl From<Option<Direction>> for Action {
    fn from(dir: Option<Direction>) -> Action {
        dir.map_or(Action::DoNothing, Action::from)
    }
}

/// Neighbours of a position in [Direction::ALL] order; absent when outside the world.
pub type Neighbors = [(Direction, Option<Position>); 4];

/// Read-only view of the world a planner searches over.
pub trait GridWorldView {
    fn current_position(&self) -> Result<Position, WorldError>;
    fn target_position(&self) -> Result<Position, WorldError>;
    /// Status of the tile at `pos`, [None] if `pos` lies outside the grid.
    fn tile_status(&self, pos: Position) -> Option<TileStatus>;

    fn neighbors(&self, pos: Position) -> Neighbors {
        Direction::ALL.map(|dir| {
            (
                dir,
                pos.step(dir).filter(|p| self.tile_status(*p).is_some()),
            )
        })
    }
}

/// A world the simulation loop can advance.
pub trait GridWorld: GridWorldView {
    /// Moves the robot one tile. Moves into missing or impassable tiles leave it in place.
    fn apply_action(&mut self, action: Action);

    fn goal_condition_met(&self) -> bool {
        match (self.current_position(), self.target_position()) {
            (Ok(robot), Ok(target)) => robot == target,
            _ => false,
        }
    }

    /// Cheap connectivity check, [None] if the world cannot tell without searching.
    fn reachable(&self, _start: &Position, _goal: &Position) -> Option<bool> {
        None
    }
}
