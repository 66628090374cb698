//! Core types: directions, positions, errors, RNG and configuration.
//!
//! Everything here is independent of tiles and boards; the `tiles` and
//! `board` modules build on these.

pub mod config;
pub mod direction;
pub mod error;
pub mod position;
pub mod rng;

pub use config::{BoardConfig, SlideRule, TileDesign, TileSetConfig};
pub use direction::{Axis, Direction, Rotation};
pub use error::{MazeError, Rejected, Result};
pub use position::Position;
pub use rng::MazeRng;
