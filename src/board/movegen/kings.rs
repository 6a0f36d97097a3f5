use super::super::types::geometry::{step, KING_STEPS};
use super::super::{Board, Color};

impl Board {
    /// One-square king moves. Castling is not generated.
    pub(crate) fn generate_king_moves(&self, side: Color, from: usize, moves: &mut Vec<Board>) {
        for &offset in &KING_STEPS {
            if let Some(to) = step(from, offset) {
                if self.is_valid_target(side, to) {
                    moves.push(self.apply_move(from, to));
                }
            }
        }
    }
}
