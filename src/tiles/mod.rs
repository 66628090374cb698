//! Tiles, their doors, tile sets and the tile bag.
//!
//! - `doors`: 4-bit door sets with rotation
//! - `tile`: numbered tiles with a rotation offset and presentation style
//! - `set`: tile-set generation from designs
//! - `bag`: the randomized supply tiles are drawn from

pub mod bag;
pub mod doors;
pub mod set;
pub mod tile;

pub use bag::TileBag;
pub use doors::Doors;
pub use set::TileSet;
pub use tile::{Tile, TileNumber, TileStyle};
