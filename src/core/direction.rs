//! Compass directions and quarter-turn rotations.
//!
//! Directions are numbered clockwise from North:
//!
//! | Direction | Index |
//! |-----------|-------|
//! | North     | 0     |
//! | East      | 1     |
//! | South     | 2     |
//! | West      | 3     |
//!
//! A [`Rotation`] is a count of 90° clockwise steps, so adding a rotation to a
//! direction is index addition mod 4.
//!
//! ```
//! use shifting_maze::core::{Direction, Rotation};
//!
//! assert_eq!(Direction::North + Rotation::QUARTER, Direction::East);
//! assert_eq!(Direction::West.opposite(), Direction::East);
//! assert_eq!(Direction::South - Direction::East, Rotation::QUARTER);
//! ```

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// One of the four compass directions.
///
/// On the board, East is increasing `x` and South is increasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The axis a line of the board runs along.
///
/// Rows run East/West, columns run North/South.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Clockwise index of this direction (North = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction with the given clockwise index, taken mod 4.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// The direction 90° clockwise from this one.
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction 90° anticlockwise from this one.
    #[must_use]
    pub const fn rotate_anticlockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The direction facing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// This direction advanced clockwise by `rotation`.
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        Self::from_index(self.index() + rotation.steps())
    }

    /// Unit offset `(dx, dy)` of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The axis of the lines this direction slides.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::Row,
            Direction::North | Direction::South => Axis::Column,
        }
    }

    /// Bit for this direction in a door mask.
    #[must_use]
    pub(crate) const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

impl Axis {
    /// The two directions a line on this axis may slide in.
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Row => [Direction::East, Direction::West],
            Axis::Column => [Direction::North, Direction::South],
        }
    }
}

/// Orientation of a tile as a number of 90° clockwise steps.
///
/// Always normalized to `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    /// No rotation.
    pub const NONE: Rotation = Rotation(0);
    /// 90° clockwise.
    pub const QUARTER: Rotation = Rotation(1);
    /// 180°.
    pub const HALF: Rotation = Rotation(2);
    /// 270° clockwise (90° anticlockwise).
    pub const THREE_QUARTERS: Rotation = Rotation(3);

    /// All four orientations.
    pub const ALL: [Rotation; 4] = [
        Rotation::NONE,
        Rotation::QUARTER,
        Rotation::HALF,
        Rotation::THREE_QUARTERS,
    ];

    /// Rotation of `steps` clockwise quarter turns, taken mod 4.
    #[must_use]
    pub const fn from_steps(steps: u8) -> Self {
        Self(steps % 4)
    }

    /// Number of clockwise quarter turns (0..=3).
    #[must_use]
    pub const fn steps(self) -> u8 {
        self.0
    }

    /// Rotation angle in degrees, clockwise.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    /// One more quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::from_steps(self.0 + 1)
    }

    /// One quarter turn anticlockwise.
    #[must_use]
    pub const fn anticlockwise(self) -> Self {
        Self::from_steps(self.0 + 3)
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_steps(4 - self.0)
    }
}

impl From<u8> for Rotation {
    fn from(steps: u8) -> Self {
        Self::from_steps(steps)
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Self::Output {
        Self::from_steps(self.0 + rhs.0)
    }
}

impl AddAssign for Rotation {
    fn add_assign(&mut self, rhs: Rotation) {
        *self = *self + rhs;
    }
}

impl Add<Rotation> for Direction {
    type Output = Direction;

    fn add(self, rhs: Rotation) -> Self::Output {
        self.rotated(rhs)
    }
}

impl AddAssign<Rotation> for Direction {
    fn add_assign(&mut self, rhs: Rotation) {
        *self = *self + rhs;
    }
}

/// Clockwise rotation taking `rhs` to `self`.
impl Sub for Direction {
    type Output = Rotation;

    fn sub(self, rhs: Direction) -> Self::Output {
        Rotation::from_steps(4 + self.index() - rhs.index())
    }
}
