//! Core board types.
//!
//! - `Piece`, `Color` and `Cell` - piece kinds, sides and decoded cell contents
//! - `Location` - a (file, rank) square
//! - `MoveDescriptor` - a (source, destination) pair
//! - `geometry` - the stride-9 index layout shared by every generator

pub mod geometry;
mod location;
mod moves;
mod piece;

pub use location::Location;
pub use moves::MoveDescriptor;
pub use piece::{Cell, Color, Piece};
