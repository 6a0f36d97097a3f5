//! Recovering a move descriptor from a before/after board pair.

use super::error::MoveError;
use super::{Board, Cell, Location, MoveDescriptor, Piece};

impl Board {
    /// Describe the single move that turns `self` into `after`.
    ///
    /// Exactly two cells must differ. The one left empty in `after` is the
    /// source, the other the destination. Only pairs produced by one
    /// generated move are guaranteed to succeed.
    ///
    /// # Example
    /// ```
    /// use stride_movegen::board::{Board, Color};
    ///
    /// let board = Board::starting_position();
    /// let after = board.generate_moves(Color::White)[0];
    /// let mv = board.describe_move(&after).unwrap();
    /// assert_eq!(board.apply_descriptor(mv).unwrap(), after);
    /// ```
    pub fn describe_move(&self, after: &Board) -> Result<MoveDescriptor, MoveError> {
        let result = self.diff_move(after);
        if let Err(err) = &result {
            log_debug!("cannot describe move {:?} -> {:?}: {}", self, after, err);
        }
        result
    }

    fn diff_move(&self, after: &Board) -> Result<MoveDescriptor, MoveError> {
        let changed: Vec<usize> = self.differing_cells(after).collect();
        let &[a, b] = changed.as_slice() else {
            return Err(MoveError::CellCountMismatch {
                changed: changed.len(),
            });
        };

        let (from, to) = match (after.is_empty_at(a), after.is_empty_at(b)) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            (true, true) => return Err(MoveError::AmbiguousVacancy),
            (false, false) => return Err(MoveError::NoVacatedCell),
        };

        Ok(MoveDescriptor::new(
            Location::from_square_index(from),
            Location::from_square_index(to),
        ))
    }

    /// Replay a descriptor. A pawn reaching its last rank becomes a queen.
    ///
    /// Fails if the source square is empty or the descriptor does not move.
    pub fn apply_descriptor(&self, mv: MoveDescriptor) -> Result<Board, MoveError> {
        let from = mv.from().index();
        let to = mv.to().index();
        if from == to {
            return Err(MoveError::NullMove {
                square: mv.from().to_string(),
            });
        }
        match self.cell(from) {
            Cell::Piece(color, Piece::Pawn) => Ok(self.apply_pawn_move(from, to, color)),
            Cell::Piece(..) => Ok(self.apply_move(from, to)),
            _ => Err(MoveError::EmptySource {
                square: mv.from().to_string(),
            }),
        }
    }
}
