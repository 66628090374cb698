//! # shifting-maze
//!
//! Core model of a sliding-tile maze game: a grid of square tiles with doors
//! on some of their four sides, where whole rows and columns can be pushed
//! one cell at a time by inserting a spare tile at one end.
//!
//! ## Design Principles
//!
//! 1. **Tiles Are Conserved**: `Tile` is not `Clone`. Tiles move between the
//!    bag, the board and the held slot by value, and every failed operation
//!    hands its tile back inside [`Rejected`].
//!
//! 2. **Rotation Is an Offset**: a tile keeps its base doors and a rotation;
//!    the doors it shows are derived on demand.
//!
//! 3. **Configuration Over Convention**: board size, slide rule and tile sets
//!    are set through `BoardConfig` and `TileSetConfig`.
//!
//! ## Coordinates
//!
//! `(0, 0)` is the top-left cell, x grows East and y grows South.
//!
//! ## Example
//!
//! ```
//! use shifting_maze::{Axis, Board, BoardConfig, Direction, MazeRng, Position, TileSet};
//!
//! let mut rng = MazeRng::new(7);
//! let mut bag = TileSet::standard().fill_bag(&mut rng);
//! let mut board = Board::from_bag(&BoardConfig::new(5, 5), &mut bag, &mut rng).unwrap();
//!
//! board.rotate_held(true).unwrap();
//! board.slide_held(Axis::Column, 1, Direction::South).unwrap();
//!
//! let reachable = board.reachable_from(Position::new(0, 0));
//! assert!(reachable.contains(&Position::new(0, 0)));
//! assert_eq!(board.tile_numbers().len(), 26);
//! ```
//!
//! ## Modules
//!
//! - `core`: directions, positions, errors, RNG, configuration
//! - `tiles`: doors, tiles, tile sets and the tile bag
//! - `board`: the grid, slides and snapshots

pub mod board;
pub mod core;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction, Rotation,
    Position,
    MazeError, Rejected, Result,
    MazeRng,
    BoardConfig, SlideRule, TileDesign, TileSetConfig,
};

pub use crate::tiles::{Doors, Tile, TileBag, TileNumber, TileSet, TileStyle};

pub use crate::board::{Board, BoardSnapshot, PlacedTile, Placement};
