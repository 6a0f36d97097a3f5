use super::super::types::geometry::{step, KNIGHT_JUMPS};
use super::super::{Board, Color};

impl Board {
    pub(crate) fn generate_knight_moves(&self, side: Color, from: usize, moves: &mut Vec<Board>) {
        for &jump in &KNIGHT_JUMPS {
            if let Some(to) = step(from, jump) {
                if self.is_valid_target(side, to) {
                    moves.push(self.apply_move(from, to));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::geometry::index_of;

    fn knight_moves(fen: &str, side: Color, file: usize, rank: usize) -> Vec<Board> {
        let board = Board::from_fen(fen);
        let mut moves = Vec::new();
        board.generate_knight_moves(side, index_of(file, rank), &mut moves);
        moves
    }

    #[test]
    fn test_knight_center_has_eight_moves() {
        assert_eq!(knight_moves("8/8/8/3N4/8/8/8/8", Color::White, 3, 3).len(), 8);
    }

    #[test]
    fn test_knight_corners_have_two_moves() {
        assert_eq!(knight_moves("N7/8/8/8/8/8/8/8", Color::White, 0, 0).len(), 2);
        assert_eq!(knight_moves("7N/8/8/8/8/8/8/8", Color::White, 7, 0).len(), 2);
        assert_eq!(knight_moves("8/8/8/8/8/8/8/n7", Color::Black, 0, 7).len(), 2);
        assert_eq!(knight_moves("8/8/8/8/8/8/8/7n", Color::Black, 7, 7).len(), 2);
    }

    #[test]
    fn test_knight_near_edges_does_not_wrap() {
        // b-file and g-file knights lose the jumps two files outward
        assert_eq!(knight_moves("8/8/8/1N6/8/8/8/8", Color::White, 1, 3).len(), 6);
        assert_eq!(knight_moves("8/8/8/6N1/8/8/8/8", Color::White, 6, 3).len(), 6);
        assert_eq!(knight_moves("8/8/8/N7/8/8/8/8", Color::White, 0, 3).len(), 4);
        assert_eq!(knight_moves("8/8/8/7N/8/8/8/8", Color::White, 7, 3).len(), 4);
    }

    #[test]
    fn test_knight_skips_friends_and_takes_enemies() {
        // f6 friendly, e3 enemy
        let moves = knight_moves("8/8/5P2/3N4/8/4p3/8/8", Color::White, 3, 3);
        assert_eq!(moves.len(), 7);
        let capture = Board::from_fen("8/8/5P2/8/8/4N3/8/8");
        assert!(moves.contains(&capture));
    }

    #[test]
    fn test_knights_from_starting_position() {
        let board = Board::starting_position();
        let mut moves = Vec::new();
        board.generate_knight_moves(Color::White, index_of(1, 7), &mut moves);
        board.generate_knight_moves(Color::White, index_of(6, 7), &mut moves);
        assert_eq!(moves.len(), 4);
    }
}
