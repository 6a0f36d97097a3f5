//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use stride_movegen::board::prelude::*;
//!
//! let board = Board::starting_position();
//! assert_eq!(board.generate_moves(Color::Black).len(), 20);
//! ```

pub use super::{
    Board, BoardBuilder, Cell, Color, FenError, Location, LocationError, MoveDescriptor,
    MoveError, Piece,
};
