use super::super::types::geometry::{ray, Offset, DIAGONAL, ORTHOGONAL};
use super::super::{Board, Color};

impl Board {
    /// Rook-style moves along ranks and files.
    pub(crate) fn generate_orthogonal_moves(
        &self,
        side: Color,
        from: usize,
        moves: &mut Vec<Board>,
    ) {
        self.generate_slider_moves(side, from, &ORTHOGONAL, moves);
    }

    /// Bishop-style moves along diagonals.
    pub(crate) fn generate_diagonal_moves(&self, side: Color, from: usize, moves: &mut Vec<Board>) {
        self.generate_slider_moves(side, from, &DIAGONAL, moves);
    }

    /// Walk each ray until the edge or the first occupied square; a
    /// capture of the blocker is included, a friendly blocker is not.
    fn generate_slider_moves(
        &self,
        side: Color,
        from: usize,
        rays: &[Offset],
        moves: &mut Vec<Board>,
    ) {
        for &offset in rays {
            for to in ray(from, offset) {
                if self.is_empty_at(to) {
                    moves.push(self.apply_move(from, to));
                    continue;
                }
                if self.occupied_by_enemy(side, to) {
                    moves.push(self.apply_move(from, to));
                }
                break;
            }
        }
    }
}
