//! Door sets.
//!
//! A tile has at most one door per edge, so the doors of a tile are a 4-bit
//! mask indexed by [`Direction::index`]. Rotating a door set is a 4-bit
//! rotate-left by the number of clockwise steps.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Rotation};

/// The set of edges of a tile that have an opening.
///
/// Serialized as a list of direction names.
///
/// ```
/// use shifting_maze::core::{Direction, Rotation};
/// use shifting_maze::tiles::Doors;
///
/// let corner = Doors::from_directions([Direction::East, Direction::South]);
/// let turned = corner.rotated(Rotation::QUARTER);
///
/// assert!(turned.contains(Direction::South));
/// assert!(turned.contains(Direction::West));
/// assert!(!turned.contains(Direction::East));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct Doors(u8);

impl Doors {
    /// No doors.
    pub const NONE: Doors = Doors(0);
    /// A door on every edge.
    pub const ALL: Doors = Doors(0b1111);

    const MASK: u8 = 0b1111;

    /// Build a door set from directions. Repeats are ignored.
    #[must_use]
    pub fn from_directions(directions: impl IntoIterator<Item = Direction>) -> Self {
        directions
            .into_iter()
            .fold(Self::NONE, |doors, d| doors.with(d))
    }

    /// Raw 4-bit mask, bit `i` set for the direction with clockwise index `i`.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Door set from a raw mask. Bits above the low four are discarded.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Whether there is a door facing `direction`.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// This set with a door added facing `direction`.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// This set with the door facing `direction` removed.
    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !direction.bit())
    }

    /// Every door moved clockwise by `rotation`.
    #[must_use]
    pub const fn rotated(self, rotation: Rotation) -> Self {
        let s = rotation.steps();
        if s == 0 {
            return self;
        }
        Self(((self.0 << s) | (self.0 >> (4 - s))) & Self::MASK)
    }

    /// Number of doors.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the tile has no doors at all.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Directions with a door, in clockwise order from North.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for Doors {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self::from_directions(iter)
    }
}

impl From<Vec<Direction>> for Doors {
    fn from(directions: Vec<Direction>) -> Self {
        Self::from_directions(directions)
    }
}

impl From<Doors> for Vec<Direction> {
    fn from(doors: Doors) -> Self {
        doors.iter().collect()
    }
}

impl std::fmt::Display for Doors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // N E S W with '-' for a wall
        for d in Direction::ALL {
            let c = match (d, self.contains(d)) {
                (Direction::North, true) => 'N',
                (Direction::East, true) => 'E',
                (Direction::South, true) => 'S',
                (Direction::West, true) => 'W',
                (_, false) => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
