//! Sliding rows and columns.
//!
//! A slide pushes a tile into one end of a line. Every placement in the line
//! moves one cell in the slide direction and the placement at the far end
//! drops off the board and is handed to the caller:
//!
//! ```text
//! slide row 1 East with X:   [A, B, C]  ->  [X, A, B]   returns C
//! ```
//!
//! Rows slide only East or West and columns only North or South.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::grid::Board;
use crate::core::{Axis, Direction, MazeError, Position, Rejected, Result};
use crate::tiles::Tile;

impl Board {
    /// Check that `direction` suits `axis` and that line `index` exists.
    ///
    /// Returns the length of the line.
    fn check_line(&self, axis: Axis, index: usize, direction: Direction) -> Result<usize> {
        let (line_count, line_len) = match axis {
            Axis::Row => (self.height(), self.width()),
            Axis::Column => (self.width(), self.height()),
        };
        if direction.axis() != axis || index >= line_count {
            return Err(MazeError::InvalidLine {
                axis,
                index,
                direction,
            });
        }
        Ok(line_len)
    }

    /// Positions of a line in slide order, from the cell a new tile enters
    /// to the cell the outgoing tile leaves from.
    ///
    /// ```
    /// use shifting_maze::core::{Axis, BoardConfig, Direction, Position};
    /// use shifting_maze::Board;
    ///
    /// let board = Board::new(&BoardConfig::new(3, 3)).unwrap();
    /// let cells: Vec<_> = board
    ///     .line_positions(Axis::Column, 2, Direction::North)
    ///     .unwrap()
    ///     .collect();
    ///
    /// assert_eq!(cells, vec![Position::new(2, 2), Position::new(2, 1), Position::new(2, 0)]);
    /// ```
    pub fn line_positions(
        &self,
        axis: Axis,
        index: usize,
        direction: Direction,
    ) -> Result<impl Iterator<Item = Position>> {
        let len = self.check_line(axis, index, direction)?;
        let last_x = self.width() as i32 - 1;
        let last_y = self.height() as i32 - 1;
        let line = index as i32;

        let entry = match direction {
            Direction::East => Position::new(0, line),
            Direction::West => Position::new(last_x, line),
            Direction::South => Position::new(line, 0),
            Direction::North => Position::new(line, last_y),
        };
        Ok(std::iter::once(entry).chain(entry.walk(direction)).take(len))
    }

    /// Slide a row or column one cell in `direction`, inserting `incoming`.
    ///
    /// Returns the tile pushed off the far end, or `None` if that cell was
    /// empty. Fails with `InvalidLine` if the direction does not suit the
    /// axis or the index is out of range, and with `ImmovableLine` if the
    /// board's slide rule fixes the line. `incoming` is handed back on
    /// failure and the board is unchanged.
    #[instrument(skip(self, incoming), fields(incoming = %incoming.number()))]
    pub fn slide_line(
        &mut self,
        axis: Axis,
        index: usize,
        direction: Direction,
        incoming: Tile,
    ) -> std::result::Result<Option<Tile>, Rejected<Tile>> {
        let line: SmallVec<[usize; 16]> = match self.line_positions(axis, index, direction) {
            Ok(positions) => positions
                .map(|pos| pos.y() as usize * self.width() + pos.x() as usize)
                .collect(),
            Err(e) => return Err(Rejected::new(e, incoming)),
        };
        if !self.slide_rule().is_movable(index) {
            return Err(Rejected::new(MazeError::ImmovableLine { axis, index }, incoming));
        }

        let cells = self.cells_mut();
        let exit = line[line.len() - 1];
        let outgoing = cells[exit].take();
        for i in (1..line.len()).rev() {
            cells[line[i]] = cells[line[i - 1]].take();
        }
        cells[line[0]] = Some(incoming);

        debug!(
            outgoing = ?outgoing.as_ref().map(Tile::number),
            "slid line"
        );
        Ok(outgoing)
    }

    /// Slide using the held tile as the incoming tile; the tile pushed off
    /// the board becomes the new held tile.
    ///
    /// Fails with `HeldSlotEmpty` if nothing is held. On any failure the held
    /// tile stays held and the board is unchanged.
    pub fn slide_held(&mut self, axis: Axis, index: usize, direction: Direction) -> Result<()> {
        let incoming = self.held.take().ok_or(MazeError::HeldSlotEmpty)?;
        match self.slide_line(axis, index, direction, incoming) {
            Ok(outgoing) => {
                self.held = outgoing;
                Ok(())
            }
            Err(rejected) => {
                let (error, tile) = rejected.into_parts();
                self.held = Some(tile);
                Err(error)
            }
        }
    }
}
