//! Cell classification and copy-on-write move application.

use super::types::geometry::{is_sentinel, rank_of, EMPTY};
use super::{Board, Cell, Color, Location, Piece};

impl Board {
    /// True if the cell at `index` is an empty square.
    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell(index).is_empty()
    }

    /// True if the cell at `index` holds a piece of `side`.
    #[inline]
    #[must_use]
    pub fn occupied_by_friendly(&self, side: Color, index: usize) -> bool {
        matches!(self.cell(index), Cell::Piece(color, _) if color == side)
    }

    /// True if the cell at `index` holds a piece of `side`'s opponent.
    #[inline]
    #[must_use]
    pub fn occupied_by_enemy(&self, side: Color, index: usize) -> bool {
        matches!(self.cell(index), Cell::Piece(color, _) if color != side)
    }

    /// A piece of `side` may land on `index`: it is empty or holds an enemy.
    #[inline]
    pub(crate) fn is_valid_target(&self, side: Color, index: usize) -> bool {
        match self.cell(index) {
            Cell::Empty => true,
            Cell::Piece(color, _) => color != side,
            Cell::Separator => false,
        }
    }

    /// New board with the piece on `from` moved to `to` and `from` emptied.
    /// Both indices must be playable squares.
    #[must_use]
    pub(crate) fn apply_move(&self, from: usize, to: usize) -> Board {
        debug_assert!(!is_sentinel(from) && !is_sentinel(to));
        let mut next = *self;
        next.cells[to] = next.cells[from];
        next.cells[from] = EMPTY;
        next
    }

    /// New board with a pawn of `side` moved from `from` to `to`.
    ///
    /// A pawn reaching its promotion rank is always replaced by a queen;
    /// no other promotion piece is ever produced.
    #[must_use]
    pub(crate) fn apply_pawn_move(&self, from: usize, to: usize, side: Color) -> Board {
        debug_assert!(!is_sentinel(from) && !is_sentinel(to));
        let piece = if rank_of(to) == side.pawn_promotion_rank() {
            Piece::Queen
        } else {
            Piece::Pawn
        };
        let mut next = *self;
        next.cells[to] = Cell::Piece(side, piece).code();
        next.cells[from] = EMPTY;
        next
    }

    /// New board with the piece on `from` moved to `to` and `from` emptied.
    ///
    /// Raw cell indices are not accepted, so a move can never land on a
    /// rank delimiter:
    /// ```compile_fail
    /// use stride_movegen::board::Board;
    ///
    /// let board = Board::from_fen("R7/8/8/8/8/8/8/8");
    /// let _ = board.apply_move(0, 8);
    /// ```
    #[must_use]
    pub fn apply_move_at(&self, from: Location, to: Location) -> Board {
        self.apply_move(from.index(), to.index())
    }
}
