//! Tile sets: validated designs that generate numbered tiles.
//!
//! Numbers are assigned sequentially from 0, design by design, so design 0
//! with a count of 40 produces tiles 0..40, design 1 continues at 40, and so
//! on. Every generated tile starts unrotated.

use tracing::{debug, instrument};

use super::bag::TileBag;
use super::tile::{Tile, TileNumber};
use crate::core::{MazeError, MazeRng, Result, TileDesign, TileSetConfig};

/// A validated set of tile designs.
///
/// ## Example
///
/// ```
/// use shifting_maze::core::{MazeRng, TileSetConfig};
/// use shifting_maze::tiles::TileSet;
///
/// let set = TileSet::new(TileSetConfig::standard()).unwrap();
/// let bag = set.fill_bag(&mut MazeRng::new(1));
///
/// assert_eq!(bag.len(), 360);
/// ```
#[derive(Clone, Debug)]
pub struct TileSet {
    name: String,
    designs: Vec<TileDesign>,
    len: u32,
}

impl TileSet {
    /// Validate a configuration.
    ///
    /// Fails with `InvalidConfig` if the set generates no tiles, more tiles
    /// than a tile number can address, or has more designs than fit in a
    /// design index.
    pub fn new(config: TileSetConfig) -> Result<Self> {
        let total = config.total().and_then(|t| u32::try_from(t).ok());
        let len = match total {
            Some(0) => {
                return Err(MazeError::InvalidConfig(format!(
                    "tile set '{}' contains no tiles",
                    config.name
                )))
            }
            Some(len) => len,
            None => {
                return Err(MazeError::InvalidConfig(format!(
                    "tile set '{}' has too many tiles",
                    config.name
                )))
            }
        };
        if config.designs.len() > usize::from(u16::MAX) {
            return Err(MazeError::InvalidConfig(format!(
                "tile set '{}' has too many designs",
                config.name
            )));
        }

        Ok(Self {
            name: config.name,
            designs: config.designs,
            len,
        })
    }

    /// The built-in standard set.
    #[must_use]
    pub fn standard() -> Self {
        let config = TileSetConfig::standard();
        Self {
            len: config.designs.iter().map(|d| d.count as u32).sum(),
            name: config.name,
            designs: config.designs,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn designs(&self) -> &[TileDesign] {
        &self.designs
    }

    /// Total number of tiles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Design a tile number was generated from.
    #[must_use]
    pub fn design_of(&self, number: TileNumber) -> Option<(u16, &TileDesign)> {
        if number.raw() >= self.len {
            return None;
        }
        // counts sum to `len`, so the running total cannot overflow
        let mut start = 0usize;
        for (index, design) in self.designs.iter().enumerate() {
            let end = start + design.count;
            if (start..end).contains(&(number.raw() as usize)) {
                return Some((index as u16, design));
            }
            start = end;
        }
        None
    }

    /// Generate every tile of the set, unrotated, in number order.
    #[must_use]
    pub fn generate(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.len());
        let mut next = 0u32;
        for (index, design) in self.designs.iter().enumerate() {
            for _ in 0..design.count {
                tiles.push(
                    Tile::new(TileNumber::new(next), design.doors)
                        .with_design(index as u16)
                        .with_style(design.style),
                );
                next += 1;
            }
        }
        tiles
    }

    /// Generate the full set into a freshly mixed bag.
    #[instrument(skip(self, rng), fields(set = %self.name))]
    pub fn fill_bag(&self, rng: &mut MazeRng) -> TileBag {
        let tiles = self.generate();
        debug!(count = tiles.len(), "generated tile set");
        TileBag::from_unique(tiles, rng)
    }
}

impl std::fmt::Display for TileSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tile set: {}", self.name)?;
        for (index, design) in self.designs.iter().enumerate() {
            writeln!(f, " {}: {} x{}", index, design.doors, design.count)?;
        }
        Ok(())
    }
}
