//! Read-only, serializable view of a board.
//!
//! The text form lists each row's tiles as `number:degrees`, with `-` for an
//! empty cell, followed by the held tile:
//!
//! ```text
//! Board layout: 3 x 2 tiles
//! 0:0 1:90 2:0
//! 3:0 - 5:270
//! Held: 6:0
//! ```

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::Rotation;
use crate::tiles::{Doors, Tile, TileNumber};

/// A tile as seen on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub number: TileNumber,
    pub rotation: Rotation,
    /// Doors after rotation.
    pub doors: Doors,
}

impl From<&Tile> for PlacedTile {
    fn from(tile: &Tile) -> Self {
        Self {
            number: tile.number(),
            rotation: tile.rotation(),
            doors: tile.effective_doors(),
        }
    }
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.number.raw(), self.rotation.degrees())
    }
}

/// Copy of a board's layout, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Option<PlacedTile>>,
    pub held: Option<PlacedTile>,
}

impl BoardSnapshot {
    /// Cells of row `y`, or an empty slice past the last row.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Option<PlacedTile>] {
        let start = y.saturating_mul(self.width).min(self.cells.len());
        let end = start.saturating_add(self.width).min(self.cells.len());
        &self.cells[start..end]
    }
}

fn write_cell(f: &mut std::fmt::Formatter<'_>, cell: Option<&PlacedTile>) -> std::fmt::Result {
    match cell {
        Some(tile) => write!(f, "{tile}"),
        None => write!(f, "-"),
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board layout: {} x {} tiles", self.width, self.height)?;
        for y in 0..self.height {
            for (x, cell) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write_cell(f, cell.as_ref())?;
            }
            writeln!(f)?;
        }
        write!(f, "Held: ")?;
        write_cell(f, self.held.as_ref())
    }
}

impl Board {
    /// Capture the current layout.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width(),
            height: self.height(),
            cells: self
                .placements()
                .map(|p| p.tile.map(PlacedTile::from))
                .collect(),
            held: self.held().map(PlacedTile::from),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.snapshot(), f)
    }
}
