use super::super::types::geometry::{rank_of, step, Offset};
use super::super::{Board, Color};

impl Board {
    /// Pushes and diagonal captures for a pawn of `side`.
    ///
    /// White moves toward rank 0, Black toward rank 7. Every destination
    /// goes through [`apply_pawn_move`](Board::apply_pawn_move), so a pawn
    /// reaching the far rank becomes a queen. No en passant.
    pub(crate) fn generate_pawn_moves(&self, side: Color, from: usize, moves: &mut Vec<Board>) {
        let dir = side.pawn_direction();
        let forward = Offset::new(dir, 0);

        if let Some(one) = step(from, forward) {
            if self.is_empty_at(one) {
                moves.push(self.apply_pawn_move(from, one, side));
                if rank_of(from) == side.pawn_start_rank() {
                    if let Some(two) = step(one, forward) {
                        if self.is_empty_at(two) {
                            moves.push(self.apply_pawn_move(from, two, side));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = step(from, Offset::new(dir, df)) {
                if self.occupied_by_enemy(side, to) {
                    moves.push(self.apply_pawn_move(from, to, side));
                }
            }
        }
    }
}
