use std::error::Error;
use std::fmt;
use std::io;

/// Failure of a world query the agent cannot plan without.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// No robot has been placed in the world.
    NoRobot,
    /// The world has no target tile.
    NoTarget,
    /// Any other failure reported by a world implementation.
    Query(String),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WorldError::NoRobot => write!(f, "no robot is present in the world"),
            WorldError::NoTarget => write!(f, "no target tile is present in the world"),
            WorldError::Query(msg) => write!(f, "world query failed: {}", msg),
        }
    }
}

impl Error for WorldError {}

/// Errors produced while parsing a text map into a [TileGrid](crate::tile_grid::TileGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownTile {
        row: usize,
        col: usize,
        symbol: char,
    },
    MissingTarget,
    MultipleTargets,
    MultipleRobots,
    NoOpenTile,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map contains no rows"),
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            MapError::UnknownTile { row, col, symbol } => {
                write!(f, "unknown tile '{}' at ({}, {})", symbol, row, col)
            }
            MapError::MissingTarget => write!(f, "map has no target tile"),
            MapError::MultipleTargets => write!(f, "map has more than one target tile"),
            MapError::MultipleRobots => write!(f, "map places more than one robot"),
            MapError::NoOpenTile => write!(f, "map has no traversable tile for the robot"),
        }
    }
}

impl Error for MapError {}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    InvalidValue(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read configuration: {}", err),
            ConfigError::InvalidValue(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::InvalidValue(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidValue(err)
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}
