//! Board encoding and pseudo-legal move generation.
//!
//! A position is stored as the FEN piece-placement field with digits
//! expanded to `_` and the rank delimiters kept, giving 71 cells laid out
//! in rows of nine. Generation produces whole successor boards; a
//! `MoveDescriptor` is recovered from a before/after pair only on request.
//!
//! # Example
//! ```
//! use stride_movegen::board::{Board, Color};
//!
//! let board = Board::starting_position();
//! let moves = board.generate_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod reconstruct;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, LocationError, MoveError};
pub use state::{Board, STARTING_FEN};
pub use types::geometry;
pub use types::{Cell, Color, Location, MoveDescriptor, Piece};
