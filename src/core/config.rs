//! Board and tile-set configuration.
//!
//! Games configure the core at startup by providing:
//! - `BoardConfig`: grid dimensions, which lines may slide, initial orientations
//! - `TileSetConfig`: the tile designs and how many copies of each exist
//!
//! Both are plain serde structs, so a loader can read them from JSON or TOML.
//! Validation happens when they are turned into a `Board` or `TileSet`.

use serde::{Deserialize, Serialize};

use crate::tiles::{Doors, TileStyle};

/// Which lines of the board may be slid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideRule {
    /// Every row and column slides.
    #[default]
    AllLines,
    /// Only odd-indexed rows and columns slide; even lines are fixed.
    OddLinesOnly,
}

impl SlideRule {
    /// Whether the line at `index` may slide under this rule.
    #[must_use]
    pub const fn is_movable(self, index: usize) -> bool {
        match self {
            SlideRule::AllLines => true,
            SlideRule::OddLinesOnly => index % 2 == 1,
        }
    }
}

/// Configuration for a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns.
    pub width: usize,

    /// Rows.
    pub height: usize,

    /// Which lines may slide.
    pub slide_rule: SlideRule,

    /// Give tiles drawn from the bag a random orientation when filling.
    pub randomize_rotations: bool,

    /// Edge length of a tile in pixels. Only used by the view.
    pub tile_size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            slide_rule: SlideRule::AllLines,
            randomize_rotations: true,
            tile_size: TileStyle::default().size,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the given dimensions and defaults otherwise.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::default().with_size(width, height)
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the slide rule.
    #[must_use]
    pub fn with_slide_rule(mut self, rule: SlideRule) -> Self {
        self.slide_rule = rule;
        self
    }

    /// Keep tiles at their current orientation when filling the board.
    #[must_use]
    pub fn fixed_rotations(mut self) -> Self {
        self.randomize_rotations = false;
        self
    }

    /// Set the tile size used by the view.
    #[must_use]
    pub fn with_tile_size(mut self, size: u32) -> Self {
        self.tile_size = size;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// A tile template: its doors in the reference orientation and how many
/// copies the set contains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDesign {
    /// Doors before any rotation.
    pub doors: Doors,

    /// Number of tiles generated from this design.
    pub count: usize,

    /// Presentation attributes copied onto every generated tile.
    #[serde(default)]
    pub style: TileStyle,
}

impl TileDesign {
    /// Create a design with the default style.
    #[must_use]
    pub fn new(doors: Doors, count: usize) -> Self {
        Self {
            doors,
            count,
            style: TileStyle::default(),
        }
    }

    /// Set the style of tiles generated from this design.
    #[must_use]
    pub fn with_style(mut self, style: TileStyle) -> Self {
        self.style = style;
        self
    }
}

/// Configuration for a tile set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSetConfig {
    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Designs in numbering order.
    pub designs: Vec<TileDesign>,
}

impl TileSetConfig {
    /// Create an empty tile set configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            designs: Vec::new(),
        }
    }

    /// A set made of `count` copies of a single design.
    pub fn uniform(name: impl Into<String>, doors: Doors, count: usize) -> Self {
        Self::new(name).with_design(TileDesign::new(doors, count))
    }

    /// The standard 360-tile set.
    ///
    /// | design | doors                    | count |
    /// |--------|--------------------------|-------|
    /// | 0      | north, east, south, west | 40    |
    /// | 1      | east, south, west        | 140   |
    /// | 2      | east, south              | 80    |
    /// | 3      | east, west               | 80    |
    /// | 4      | east                     | 20    |
    #[must_use]
    pub fn standard() -> Self {
        use crate::core::Direction::{East, North, South, West};

        Self::new("standard")
            .with_design(TileDesign::new(Doors::from_directions([North, East, South, West]), 40))
            .with_design(TileDesign::new(Doors::from_directions([East, South, West]), 140))
            .with_design(TileDesign::new(Doors::from_directions([East, South]), 80))
            .with_design(TileDesign::new(Doors::from_directions([East, West]), 80))
            .with_design(TileDesign::new(Doors::from_directions([East]), 20))
    }

    /// Add a design.
    #[must_use]
    pub fn with_design(mut self, design: TileDesign) -> Self {
        self.designs.push(design);
        self
    }

    /// Total number of tiles the set generates, or `None` if the counts
    /// overflow `usize`.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.designs
            .iter()
            .try_fold(0usize, |total, d| total.checked_add(d.count))
    }
}
