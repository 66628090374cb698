//! Tiles: numbered pieces with doors and an orientation.
//!
//! `Tile` holds its doors in a fixed reference orientation plus a
//! [`Rotation`] offset. The doors a tile actually shows are always derived
//! on read via [`Tile::effective_doors`]; the stored doors never change.
//!
//! Tiles are not `Clone`. Each physical tile lives in exactly one
//! place (bag, board cell or held slot) and moves between them by value.

use serde::{Deserialize, Serialize};

use super::doors::Doors;
use crate::core::{Direction, MazeRng, Rotation};

/// Stable identifier of a physical tile within a tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileNumber(pub u32);

impl TileNumber {
    /// Create a new tile number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Presentation attributes of a tile.
///
/// The core never interprets these; they travel with the tile for the view.
/// Colours are RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TileStyle {
    pub frame_colour: [u8; 3],
    pub wall_colour: [u8; 3],
    pub floor_colour: [u8; 3],
    /// Edge length in pixels, frame included.
    pub size: u32,
    pub frame: u32,
    pub wall_width: u32,
    pub door_width: u32,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            frame_colour: [192, 192, 192],
            wall_colour: [200, 100, 100],
            floor_colour: [150, 150, 255],
            size: 102,
            frame: 1,
            wall_width: 10,
            door_width: 50,
        }
    }
}

/// A maze tile.
///
/// ```
/// use shifting_maze::core::Direction;
/// use shifting_maze::tiles::{Doors, Tile, TileNumber};
///
/// let mut tile = Tile::new(TileNumber::new(7), Doors::from_directions([Direction::North]));
/// tile.rotate(true);
///
/// assert!(tile.has_door(Direction::East));
/// assert!(!tile.has_door(Direction::North));
/// ```
#[derive(Debug)]
pub struct Tile {
    number: TileNumber,
    design: u16,
    doors: Doors,
    rotation: Rotation,
    style: TileStyle,
}

impl Tile {
    /// Create an unrotated tile with the default style.
    #[must_use]
    pub fn new(number: TileNumber, doors: Doors) -> Self {
        Self {
            number,
            design: 0,
            doors,
            rotation: Rotation::NONE,
            style: TileStyle::default(),
        }
    }

    /// Set the design index this tile was generated from.
    #[must_use]
    pub fn with_design(mut self, design: u16) -> Self {
        self.design = design;
        self
    }

    /// Set the initial orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the presentation attributes.
    #[must_use]
    pub fn with_style(mut self, style: TileStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn number(&self) -> TileNumber {
        self.number
    }

    /// Index of the design in its tile set.
    #[must_use]
    pub fn design(&self) -> u16 {
        self.design
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn style(&self) -> &TileStyle {
        &self.style
    }

    /// Turn the tile a quarter turn.
    pub fn rotate(&mut self, clockwise: bool) {
        self.rotation = if clockwise {
            self.rotation.clockwise()
        } else {
            self.rotation.anticlockwise()
        };
    }

    /// Turn the tile by an arbitrary rotation.
    pub fn rotate_by(&mut self, rotation: Rotation) {
        self.rotation += rotation;
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Give the tile a uniformly random orientation.
    pub fn randomize_rotation(&mut self, rng: &mut MazeRng) {
        self.rotation = rng.rotation();
    }

    /// Doors as currently oriented.
    #[must_use]
    pub fn effective_doors(&self) -> Doors {
        self.doors.rotated(self.rotation)
    }

    /// Whether the tile, as currently oriented, opens towards `direction`.
    #[must_use]
    pub fn has_door(&self, direction: Direction) -> bool {
        self.effective_doors().contains(direction)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} at {}",
            self.number,
            self.effective_doors(),
            self.rotation
        )
    }
}
