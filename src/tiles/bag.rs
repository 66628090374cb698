//! The tile bag: a randomized supply of tiles.
//!
//! Tiles are drawn from the end of an internal list that is shuffled on
//! construction and whenever the caller asks for a [`TileBag::mix`].
//! Returning tiles does not re-mix.
//!
//! ## Invariants
//!
//! - Every tile in the bag has a distinct number.
//! - Multi-tile draws and returns are all-or-nothing.
//! - Failed returns hand the tiles back inside [`Rejected`].

use rustc_hash::FxHashSet;
use tracing::{debug, instrument, trace};

use super::tile::{Tile, TileNumber};
use crate::core::{MazeError, MazeRng, Rejected, Result};

/// A bag of tiles to draw from.
///
/// ## Example
///
/// ```
/// use shifting_maze::core::{MazeRng, TileSetConfig};
/// use shifting_maze::tiles::TileSet;
///
/// let mut rng = MazeRng::new(42);
/// let mut bag = TileSet::standard().fill_bag(&mut rng);
///
/// let hand = bag.draw_tiles(5).unwrap();
/// assert_eq!(bag.len(), 355);
///
/// bag.return_tiles(hand).unwrap();
/// bag.mix(&mut rng);
/// assert_eq!(bag.len(), 360);
/// ```
#[derive(Debug, Default)]
pub struct TileBag {
    tiles: Vec<Tile>,
    numbers: FxHashSet<TileNumber>,
}

impl TileBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mixed bag from the given tiles.
    ///
    /// Fails with `DuplicateTile` if two tiles share a number; all tiles are
    /// handed back in that case.
    pub fn from_tiles(tiles: Vec<Tile>, rng: &mut MazeRng) -> std::result::Result<Self, Rejected<Vec<Tile>>> {
        let mut bag = Self::new();
        bag.return_tiles(tiles)?;
        bag.mix(rng);
        Ok(bag)
    }

    /// Bag from tiles already known to have distinct numbers.
    pub(crate) fn from_unique(tiles: Vec<Tile>, rng: &mut MazeRng) -> Self {
        let numbers = tiles.iter().map(Tile::number).collect();
        let mut bag = Self { tiles, numbers };
        debug_assert_eq!(bag.tiles.len(), bag.numbers.len());
        bag.mix(rng);
        bag
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a tile with this number is in the bag.
    #[must_use]
    pub fn contains(&self, number: TileNumber) -> bool {
        self.numbers.contains(&number)
    }

    /// Numbers of the tiles in the bag, next draw last.
    pub fn numbers(&self) -> impl Iterator<Item = TileNumber> + '_ {
        self.tiles.iter().map(Tile::number)
    }

    /// Randomly permute the bag.
    #[instrument(skip_all, fields(len = self.tiles.len()))]
    pub fn mix(&mut self, rng: &mut MazeRng) {
        rng.shuffle(&mut self.tiles);
        trace!("mixed bag");
    }

    /// Draw one tile.
    pub fn draw_tile(&mut self) -> Result<Tile> {
        let tile = self.tiles.pop().ok_or(MazeError::EmptyBag {
            requested: 1,
            available: 0,
        })?;
        self.numbers.remove(&tile.number());
        trace!(number = %tile.number(), "drew tile");
        Ok(tile)
    }

    /// Draw `count` tiles, or none at all if fewer remain.
    #[instrument(skip(self), fields(available = self.tiles.len()))]
    pub fn draw_tiles(&mut self, count: usize) -> Result<Vec<Tile>> {
        if count > self.tiles.len() {
            return Err(MazeError::EmptyBag {
                requested: count,
                available: self.tiles.len(),
            });
        }

        let start = self.tiles.len() - count;
        // Keep draw order consistent with repeated draw_tile calls
        let drawn: Vec<Tile> = self.tiles.drain(start..).rev().collect();
        for tile in &drawn {
            self.numbers.remove(&tile.number());
        }
        debug!(count, "drew tiles");
        Ok(drawn)
    }

    /// Put a tile back. The bag is not re-mixed.
    pub fn return_tile(&mut self, tile: Tile) -> std::result::Result<(), Rejected<Tile>> {
        if self.numbers.contains(&tile.number()) {
            return Err(Rejected::new(MazeError::DuplicateTile(tile.number()), tile));
        }
        trace!(number = %tile.number(), "returned tile");
        self.numbers.insert(tile.number());
        self.tiles.push(tile);
        Ok(())
    }

    /// Put several tiles back, or none if any number is already present or
    /// repeated within `tiles`. The bag is not re-mixed.
    #[instrument(skip_all, fields(count = tiles.len()))]
    pub fn return_tiles(&mut self, tiles: Vec<Tile>) -> std::result::Result<(), Rejected<Vec<Tile>>> {
        let mut incoming = FxHashSet::default();
        let duplicate = tiles
            .iter()
            .map(Tile::number)
            .find(|number| self.numbers.contains(number) || !incoming.insert(*number));
        if let Some(number) = duplicate {
            return Err(Rejected::new(MazeError::DuplicateTile(number), tiles));
        }

        self.numbers.extend(incoming);
        self.tiles.extend(tiles);
        debug!(len = self.tiles.len(), "returned tiles");
        Ok(())
    }
}

impl std::fmt::Display for TileBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile bag:")?;
        for number in self.numbers() {
            write!(f, " {}", number.raw())?;
        }
        Ok(())
    }
}
