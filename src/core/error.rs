//! Error types for board, bag and configuration operations.
//!
//! Every error is a local condition the caller can recover from: the game
//! loop decides whether to ignore the key press, log it or tell the player.
//!
//! Operations that take ownership of a tile fail with [`Rejected`], which
//! hands the tile back so that no tile is ever lost on an error path.

use thiserror::Error;

use super::direction::{Axis, Direction};
use super::position::Position;
use crate::tiles::TileNumber;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Errors raised by the maze core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("cell {0} already holds a tile")]
    OccupiedCell(Position),

    #[error("cell {0} is empty")]
    EmptyCell(Position),

    #[error("cannot slide {axis} {index} {direction}")]
    InvalidLine {
        axis: Axis,
        index: usize,
        direction: Direction,
    },

    #[error("{axis} {index} is fixed and cannot slide")]
    ImmovableLine { axis: Axis, index: usize },

    #[error("requested {requested} tiles but the bag holds {available}")]
    EmptyBag { requested: usize, available: usize },

    #[error("{0} is already in the bag")]
    DuplicateTile(TileNumber),

    #[error("held slot already holds {0}")]
    HeldSlotOccupied(TileNumber),

    #[error("no tile is held")]
    HeldSlotEmpty,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A failed operation that hands back the value it was given.
///
/// ```
/// use shifting_maze::core::{MazeError, Position};
/// use shifting_maze::tiles::{Doors, Tile, TileNumber};
/// use shifting_maze::{Board, BoardConfig};
///
/// let mut board = Board::new(&BoardConfig::default().with_size(3, 3)).unwrap();
/// let outside = Position::new(5, 5);
/// let rejected = board
///     .place_tile(outside, Tile::new(TileNumber::new(0), Doors::ALL))
///     .unwrap_err();
///
/// assert!(matches!(rejected.error, MazeError::OutOfBounds { .. }));
/// let tile = rejected.into_inner();
/// assert_eq!(tile.number(), TileNumber::new(0));
/// ```
#[derive(Debug)]
pub struct Rejected<T> {
    /// Why the operation failed.
    pub error: MazeError,
    /// The value the operation was given, unchanged.
    pub value: T,
}

impl<T> Rejected<T> {
    pub(crate) fn new(error: MazeError, value: T) -> Self {
        Self { error, value }
    }

    /// Take back the rejected value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Split into error and value.
    #[must_use]
    pub fn into_parts(self) -> (MazeError, T) {
        (self.error, self.value)
    }
}

impl<T> std::fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.error, f)
    }
}

impl<T: std::fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Drops the rejected value. Only use when the value is not needed back.
impl<T> From<Rejected<T>> for MazeError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
