//! Pseudo-legal move generation.
//!
//! Every generator appends complete successor boards to a shared list; no
//! move objects are built here. Moves are not checked for leaving the
//! mover's king attacked, and castling and en passant are never produced.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::geometry::BOARD_CELLS;
use super::{Board, Cell, Color, Piece};

impl Board {
    /// Every pseudo-legal successor of this position for `side`.
    ///
    /// Squares are visited in index order; within a square the order is
    /// that of the piece's direction table. Callers should rely only on each
    /// move appearing exactly once.
    #[must_use]
    pub fn generate_moves(&self, side: Color) -> Vec<Board> {
        let mut moves = Vec::new();
        for from in 0..BOARD_CELLS {
            if let Cell::Piece(color, piece) = self.cell(from) {
                if color == side {
                    self.generate_piece_moves(side, piece, from, &mut moves);
                }
            }
        }
        log_trace!("generated {} moves for {}", moves.len(), side);
        moves
    }

    /// Append the moves of the `piece` of `side` standing on `from`.
    pub(crate) fn generate_piece_moves(
        &self,
        side: Color,
        piece: Piece,
        from: usize,
        moves: &mut Vec<Board>,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(side, from, moves),
            Piece::Knight => self.generate_knight_moves(side, from, moves),
            Piece::Bishop => self.generate_diagonal_moves(side, from, moves),
            Piece::Rook => self.generate_orthogonal_moves(side, from, moves),
            Piece::Queen => {
                self.generate_orthogonal_moves(side, from, moves);
                self.generate_diagonal_moves(side, from, moves);
            }
            Piece::King => self.generate_king_moves(side, from, moves),
        }
    }

    /// Count leaf positions of the pseudo-legal move tree, sides alternating
    /// from `side`.
    #[must_use]
    pub fn perft(&self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|next| next.perft(side.opponent(), depth - 1))
            .sum()
    }
}
