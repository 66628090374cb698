//! Grid coordinates.
//!
//! A `Position` is a plain `(x, y)` value: `x` is the column and grows East,
//! `y` is the row and grows South, so `(0, 0)` is the top-left cell.
//! Movement never clamps or wraps; the board decides what is in bounds.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A (column, row) coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Create a position from column and row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Coordinates as `(x, y)`.
    #[must_use]
    pub const fn coords(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Coordinates as `(y, x)`, i.e. row-major order.
    #[must_use]
    pub const fn coords_rev(self) -> (i32, i32) {
        (self.y, self.x)
    }

    /// The position one cell away in `direction`.
    #[must_use]
    pub const fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Successive positions in `direction`, starting one step from `self`.
    ///
    /// ```
    /// use shifting_maze::core::{Direction, Position};
    ///
    /// let line: Vec<_> = Position::new(0, 1).walk(Direction::East).take(2).collect();
    /// assert_eq!(line, vec![Position::new(1, 1), Position::new(2, 1)]);
    /// ```
    pub fn walk(self, direction: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(Some(self.moved(direction)), move |pos| {
            Some(pos.moved(direction))
        })
    }

    /// The four adjacent positions with the direction leading to each.
    #[must_use]
    pub fn neighbors(self) -> [(Position, Direction); 4] {
        Direction::ALL.map(|d| (self.moved(d), d))
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, rhs: Direction) -> Self::Output {
        self.moved(rhs)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
