//! The maze board.
//!
//! - `grid`: cell storage, placement, rotation, the held slot and door queries
//! - `slide`: row and column slides
//! - `snapshot`: serializable layout view and its text dump

pub mod grid;
pub mod slide;
pub mod snapshot;

pub use grid::{Board, Placement};
pub use snapshot::{BoardSnapshot, PlacedTile};
