//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use stride_movegen::board::{BoardBuilder, Color, Location, Piece};
//!
//! let e1: Location = "e1".parse().unwrap();
//! let e8: Location = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3");
//! ```

use super::{Board, Cell, Color, Location, Piece};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Location, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder holding every piece of `board`.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let pieces = (0..board.cells().len())
            .filter_map(|idx| match board.cell(idx) {
                Cell::Piece(color, piece) => {
                    Location::from_index(idx).map(|loc| (loc, color, piece))
                }
                _ => None,
            })
            .collect();
        BoardBuilder { pieces }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_board(&Board::starting_position())
    }

    /// Place a piece, replacing whatever stood on `location`.
    #[must_use]
    pub fn piece(mut self, location: Location, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(loc, _, _)| *loc != location);
        self.pieces.push((location, color, piece));
        self
    }

    /// Remove a piece from a location.
    #[must_use]
    pub fn clear(mut self, location: Location) -> Self {
        self.pieces.retain(|(loc, _, _)| *loc != location);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (location, color, piece) in self.pieces {
            board.cells[location.index()] = Cell::Piece(color, piece).code();
        }
        board
    }
}
