//! The board grid: placements, the held slot and connectivity queries.
//!
//! Cells are stored row-major in a flat `Vec<Option<Tile>>` at index
//! `y * width + x`. The board owns every tile placed on it plus at most one
//! held tile; tiles enter and leave only by value.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use crate::core::{BoardConfig, Direction, MazeError, MazeRng, Position, Rejected, Result, SlideRule};
use crate::tiles::{Tile, TileBag, TileNumber};

/// A single cell's occupancy together with its position.
#[derive(Clone, Copy, Debug)]
pub struct Placement<'a> {
    pub position: Position,
    pub tile: Option<&'a Tile>,
}

/// The maze board.
///
/// ## Example
///
/// ```
/// use shifting_maze::core::{Axis, BoardConfig, Direction, MazeRng, Position};
/// use shifting_maze::tiles::TileSet;
/// use shifting_maze::Board;
///
/// let mut rng = MazeRng::new(42);
/// let mut bag = TileSet::standard().fill_bag(&mut rng);
/// let mut board = Board::from_bag(&BoardConfig::default(), &mut bag, &mut rng).unwrap();
///
/// // Push the held tile into row 3 from the west
/// board.slide_held(Axis::Row, 3, Direction::East).unwrap();
///
/// let open = board.check_for_door(Position::new(3, 3), Direction::North);
/// assert_eq!(open, board.check_for_door(Position::new(3, 2), Direction::South));
/// ```
#[derive(Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Tile>>,
    pub(super) held: Option<Tile>,
    slide_rule: SlideRule,
    tile_size: u32,
}

impl Board {
    /// Largest number of cells a board may have.
    pub const MAX_CELLS: usize = 1 << 16;

    /// Create an empty board.
    ///
    /// Fails with `InvalidConfig` if either dimension is zero or the board
    /// would have more than [`Board::MAX_CELLS`] cells.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(MazeError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                config.width, config.height
            )));
        }
        // with both sides at least 1 this also keeps coordinates within i32
        let cell_count = match config.width.checked_mul(config.height) {
            Some(count) if count <= Self::MAX_CELLS => count,
            _ => {
                return Err(MazeError::InvalidConfig(format!(
                    "board {}x{} is too large, at most {} cells are allowed",
                    config.width,
                    config.height,
                    Self::MAX_CELLS
                )))
            }
        };

        Ok(Self {
            width: config.width,
            height: config.height,
            cells: std::iter::repeat_with(|| None).take(cell_count).collect(),
            held: None,
            slide_rule: config.slide_rule,
            tile_size: config.tile_size,
        })
    }

    /// Fill every cell and the held slot from the bag.
    ///
    /// Draws `width * height + 1` tiles or none at all; the last tile drawn
    /// becomes the held tile. With `randomize_rotations` every drawn tile is
    /// given a random orientation.
    #[instrument(skip_all, fields(width = config.width, height = config.height))]
    pub fn from_bag(config: &BoardConfig, bag: &mut TileBag, rng: &mut MazeRng) -> Result<Self> {
        let mut board = Self::new(config)?;
        let mut tiles = bag.draw_tiles(config.cell_count() + 1)?;

        if config.randomize_rotations {
            for tile in &mut tiles {
                tile.randomize_rotation(rng);
            }
        }

        board.held = tiles.pop();
        for (cell, tile) in board.cells.iter_mut().zip(tiles) {
            *cell = Some(tile);
        }
        debug!(remaining = bag.len(), "filled board from bag");
        Ok(board)
    }

    /// Fill every cell, row-major, from `tiles` at their current rotations.
    ///
    /// `tiles` must hold exactly `width * height` tiles; otherwise they are
    /// handed back with `InvalidConfig`.
    pub fn from_tiles(config: &BoardConfig, tiles: Vec<Tile>) -> std::result::Result<Self, Rejected<Vec<Tile>>> {
        let mut board = match Self::new(config) {
            Ok(board) => board,
            Err(e) => return Err(Rejected::new(e, tiles)),
        };
        if tiles.len() != board.cells.len() {
            let error = MazeError::InvalidConfig(format!(
                "{} tiles cannot fill a {}x{} board",
                tiles.len(),
                board.width,
                board.height
            ));
            return Err(Rejected::new(error, tiles));
        }

        for (cell, tile) in board.cells.iter_mut().zip(tiles) {
            *cell = Some(tile);
        }
        Ok(board)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Edge length of a tile in pixels, for the view.
    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[must_use]
    pub fn slide_rule(&self) -> SlideRule {
        self.slide_rule
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Flat index of `pos`, or `None` if it is off the board.
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let (x, y) = pos.coords();
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub(super) fn checked_index(&self, pos: Position) -> Result<usize> {
        self.index(pos).ok_or(MazeError::OutOfBounds {
            position: pos,
            width: self.width,
            height: self.height,
        })
    }

    pub(super) fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub(super) fn cells_mut(&mut self) -> &mut [Option<Tile>] {
        &mut self.cells
    }

    /// Tile at `pos`, if the cell is on the board and occupied.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Every cell in row-major order.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| Placement {
            position: self.position_of(i),
            tile: cell.as_ref(),
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Put a tile into an empty cell.
    #[instrument(skip(self, tile), fields(number = %tile.number()))]
    pub fn place_tile(&mut self, pos: Position, tile: Tile) -> std::result::Result<(), Rejected<Tile>> {
        let index = match self.checked_index(pos) {
            Ok(index) => index,
            Err(e) => return Err(Rejected::new(e, tile)),
        };
        if self.cells[index].is_some() {
            return Err(Rejected::new(MazeError::OccupiedCell(pos), tile));
        }
        self.cells[index] = Some(tile);
        trace!("placed tile");
        Ok(())
    }

    /// Remove and return the tile at `pos`.
    pub fn take_tile(&mut self, pos: Position) -> Result<Tile> {
        let index = self.checked_index(pos)?;
        self.cells[index].take().ok_or(MazeError::EmptyCell(pos))
    }

    /// Turn the tile at `pos` a quarter turn.
    #[instrument(skip(self))]
    pub fn rotate_tile(&mut self, pos: Position, clockwise: bool) -> Result<()> {
        let index = self.checked_index(pos)?;
        let tile = self.cells[index].as_mut().ok_or(MazeError::EmptyCell(pos))?;
        tile.rotate(clockwise);
        trace!(rotation = %tile.rotation(), "rotated tile");
        Ok(())
    }

    /// The held tile, if any.
    #[must_use]
    pub fn held(&self) -> Option<&Tile> {
        self.held.as_ref()
    }

    /// Put a tile into the empty held slot.
    pub fn set_held(&mut self, tile: Tile) -> std::result::Result<(), Rejected<Tile>> {
        if let Some(current) = &self.held {
            return Err(Rejected::new(MazeError::HeldSlotOccupied(current.number()), tile));
        }
        self.held = Some(tile);
        Ok(())
    }

    /// Remove the held tile.
    pub fn take_held(&mut self) -> Option<Tile> {
        self.held.take()
    }

    /// Turn the held tile a quarter turn.
    pub fn rotate_held(&mut self, clockwise: bool) -> Result<()> {
        let tile = self.held.as_mut().ok_or(MazeError::HeldSlotEmpty)?;
        tile.rotate(clockwise);
        Ok(())
    }

    /// Numbers of every tile on the board followed by the held tile.
    #[must_use]
    pub fn tile_numbers(&self) -> Vec<TileNumber> {
        self.cells
            .iter()
            .chain(std::iter::once(&self.held))
            .flatten()
            .map(Tile::number)
            .collect()
    }

    /// Empty the board and the held slot, returning every tile.
    #[instrument(skip(self))]
    pub fn take_all(&mut self) -> Vec<Tile> {
        let tiles: Vec<Tile> = self
            .cells
            .iter_mut()
            .chain(std::iter::once(&mut self.held))
            .filter_map(Option::take)
            .collect();
        debug!(count = tiles.len(), "cleared board");
        tiles
    }

    /// Whether the tile at `pos` has a door facing `direction`.
    ///
    /// One-sided: the neighbouring tile is not consulted.
    #[must_use]
    pub fn has_door(&self, pos: Position, direction: Direction) -> bool {
        self.tile(pos).is_some_and(|tile| tile.has_door(direction))
    }

    /// Whether there is an open passage from `pos` towards `direction`.
    ///
    /// True only if the tile at `pos` has a door facing `direction` and the
    /// neighbouring tile exists and has a door facing back. Empty cells and
    /// the board edge close the passage.
    #[must_use]
    pub fn check_for_door(&self, pos: Position, direction: Direction) -> bool {
        self.has_door(pos, direction) && self.has_door(pos.moved(direction), direction.opposite())
    }

    /// Directions with an open passage out of `pos`.
    #[must_use]
    pub fn open_exits(&self, pos: Position) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.check_for_door(pos, d))
            .collect()
    }

    /// Every position connected to `pos` through open passages.
    ///
    /// Includes `pos` itself if it holds a tile; empty if it does not.
    #[must_use]
    pub fn reachable_from(&self, pos: Position) -> FxHashSet<Position> {
        let mut seen = FxHashSet::default();
        if self.tile(pos).is_none() {
            return seen;
        }

        let mut queue = VecDeque::from([pos]);
        seen.insert(pos);
        while let Some(current) = queue.pop_front() {
            for d in self.open_exits(current) {
                let next = current.moved(d);
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Doors;
    use Direction::{East, North, South, West};

    fn tile(n: u32, doors: impl IntoIterator<Item = Direction>) -> Tile {
        Tile::new(TileNumber::new(n), Doors::from_directions(doors))
    }

    fn board(width: usize, height: usize) -> Board {
        Board::new(&BoardConfig::new(width, height)).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board(3, 2);
        assert_eq!(board.cell_count(), 6);
        assert_eq!(board.tile_count(), 0);
        assert!(board.held().is_none());
        assert!(board.placements().all(|p| p.tile.is_none()));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Board::new(&BoardConfig::new(0, 3)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let err = Board::new(&BoardConfig::new(i32::MAX as usize, 1)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfig(_)));

        let err = Board::new(&BoardConfig::new(usize::MAX, 2)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfig(_)));

        let err = Board::new(&BoardConfig::new(257, 256)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfig(_)));

        let largest = Board::new(&BoardConfig::new(256, 256)).unwrap();
        assert_eq!(largest.cell_count(), Board::MAX_CELLS);
    }

    #[test]
    fn test_contains() {
        let board = board(3, 2);
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(2, 1)));
        assert!(!board.contains(Position::new(3, 0)));
        assert!(!board.contains(Position::new(0, 2)));
        assert!(!board.contains(Position::new(-1, 0)));
    }

    #[test]
    fn test_place_and_take() {
        let mut board = board(3, 3);
        let pos = Position::new(1, 2);
        board.place_tile(pos, tile(4, [North])).unwrap();
        assert_eq!(board.tile(pos).map(Tile::number), Some(TileNumber::new(4)));

        let taken = board.take_tile(pos).unwrap();
        assert_eq!(taken.number(), TileNumber::new(4));
        assert_eq!(board.take_tile(pos).unwrap_err(), MazeError::EmptyCell(pos));
    }

    #[test]
    fn test_place_on_occupied_cell_hands_tile_back() {
        let mut board = board(2, 2);
        let pos = Position::new(0, 0);
        board.place_tile(pos, tile(1, [North])).unwrap();

        let rejected = board.place_tile(pos, tile(2, [South])).unwrap_err();
        assert_eq!(rejected.error, MazeError::OccupiedCell(pos));
        assert_eq!(rejected.into_inner().number(), TileNumber::new(2));
        assert_eq!(board.tile(pos).map(Tile::number), Some(TileNumber::new(1)));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = board(2, 2);
        let rejected = board.place_tile(Position::new(2, 0), tile(1, [])).unwrap_err();
        assert_eq!(
            rejected.error,
            MazeError::OutOfBounds {
                position: Position::new(2, 0),
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn test_take_and_rotate_out_of_bounds() {
        let mut board = board(2, 2);
        let outside = Position::new(0, -1);
        let expected = MazeError::OutOfBounds {
            position: outside,
            width: 2,
            height: 2,
        };
        assert_eq!(board.take_tile(outside).unwrap_err(), expected);
        assert_eq!(board.rotate_tile(outside, true).unwrap_err(), expected);
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_rotate_tile() {
        let mut board = board(2, 2);
        let pos = Position::new(1, 1);
        board.place_tile(pos, tile(0, [North])).unwrap();

        board.rotate_tile(pos, true).unwrap();
        assert!(board.has_door(pos, East));
        board.rotate_tile(pos, false).unwrap();
        board.rotate_tile(pos, false).unwrap();
        assert!(board.has_door(pos, West));
    }

    #[test]
    fn test_rotate_empty_cell_changes_nothing() {
        let mut board = board(2, 2);
        board.place_tile(Position::new(0, 0), tile(0, [North])).unwrap();

        let err = board.rotate_tile(Position::new(1, 0), true).unwrap_err();
        assert_eq!(err, MazeError::EmptyCell(Position::new(1, 0)));
        let untouched = board.tile(Position::new(0, 0)).unwrap();
        assert_eq!(untouched.rotation(), crate::core::Rotation::NONE);
    }

    #[test]
    fn test_held_slot() {
        let mut board = board(2, 2);
        assert_eq!(board.rotate_held(true).unwrap_err(), MazeError::HeldSlotEmpty);

        board.set_held(tile(5, [North])).unwrap();
        let rejected = board.set_held(tile(6, [North])).unwrap_err();
        assert_eq!(rejected.error, MazeError::HeldSlotOccupied(TileNumber::new(5)));

        board.rotate_held(true).unwrap();
        assert!(board.held().unwrap().has_door(East));
        assert_eq!(board.take_held().map(|t| t.number()), Some(TileNumber::new(5)));
        assert!(board.held().is_none());
    }

    #[test]
    fn test_check_for_door_requires_both_sides() {
        let mut board = board(2, 1);
        let left = Position::new(0, 0);
        let right = Position::new(1, 0);
        board.place_tile(left, tile(0, [East])).unwrap();
        board.place_tile(right, tile(1, [North])).unwrap();

        assert!(board.has_door(left, East));
        assert!(!board.check_for_door(left, East));

        // a quarter turn anticlockwise takes North to West
        board.rotate_tile(right, false).unwrap();
        assert!(board.check_for_door(left, East));
        assert!(board.check_for_door(right, West));
    }

    #[test]
    fn test_check_for_door_edges_and_gaps() {
        let mut board = board(2, 2);
        board.place_tile(Position::new(0, 0), tile(0, [North, East, South, West])).unwrap();

        // board edge
        assert!(!board.check_for_door(Position::new(0, 0), North));
        assert!(!board.check_for_door(Position::new(0, 0), West));
        // empty neighbour
        assert!(!board.check_for_door(Position::new(0, 0), East));
        // empty origin
        assert!(!board.check_for_door(Position::new(1, 1), North));
        // off-board origin
        assert!(!board.check_for_door(Position::new(-1, 0), East));
    }

    #[test]
    fn test_open_exits_and_reachability() {
        // Row of corridors with a wall after the second tile:
        // [E][W E][W] [N]
        let mut board = board(4, 1);
        board.place_tile(Position::new(0, 0), tile(0, [East])).unwrap();
        board.place_tile(Position::new(1, 0), tile(1, [West, East])).unwrap();
        board.place_tile(Position::new(2, 0), tile(2, [West])).unwrap();
        board.place_tile(Position::new(3, 0), tile(3, [West, North])).unwrap();

        assert_eq!(board.open_exits(Position::new(1, 0)).as_slice(), &[East, West]);
        assert!(board.open_exits(Position::new(3, 0)).is_empty());

        let reach = board.reachable_from(Position::new(0, 0));
        assert_eq!(reach.len(), 3);
        assert!(reach.contains(&Position::new(2, 0)));
        assert!(!reach.contains(&Position::new(3, 0)));

        assert!(board.reachable_from(Position::new(9, 9)).is_empty());
    }

    #[test]
    fn test_from_tiles() {
        let tiles = (0..4).map(|n| tile(n, [North])).collect();
        let board = Board::from_tiles(&BoardConfig::new(2, 2), tiles).unwrap();
        assert_eq!(board.tile(Position::new(1, 0)).map(Tile::number), Some(TileNumber::new(1)));
        assert_eq!(board.tile(Position::new(0, 1)).map(Tile::number), Some(TileNumber::new(2)));

        let short = (0..3).map(|n| tile(n, [North])).collect();
        let rejected = Board::from_tiles(&BoardConfig::new(2, 2), short).unwrap_err();
        assert!(matches!(rejected.error, MazeError::InvalidConfig(_)));
        assert_eq!(rejected.into_inner().len(), 3);
    }

    #[test]
    fn test_placements_row_major() {
        let board = board(3, 2);
        let positions: Vec<_> = board.placements().map(|p| p.position.coords()).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_take_all() {
        let mut board = board(2, 1);
        board.place_tile(Position::new(1, 0), tile(1, [])).unwrap();
        board.set_held(tile(2, [])).unwrap();
        assert_eq!(board.tile_numbers(), vec![TileNumber::new(1), TileNumber::new(2)]);

        let tiles = board.take_all();
        assert_eq!(tiles.len(), 2);
        assert_eq!(board.tile_count(), 0);
        assert!(board.held().is_none());
    }
}
