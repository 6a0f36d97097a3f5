//! Move counts for known positions.

use crate::board::geometry::index_of;
use crate::board::{BoardBuilder, Color, Location, Piece};
use crate::Board;

/// Moves available to a lone white `piece` on every square of an empty board.
fn empty_board_counts(piece: Piece) -> Vec<usize> {
    let mut counts = Vec::with_capacity(64);
    for rank in 0..8 {
        for file in 0..8 {
            let location = Location::new(file, rank).unwrap();
            let board = BoardBuilder::new()
                .piece(location, Color::White, piece)
                .build();
            counts.push(board.generate_moves(Color::White).len());
        }
    }
    counts
}

#[test]
fn test_initial_position_twenty_moves_each_side() {
    let board = Board::starting_position();
    assert_eq!(board.generate_moves(Color::White).len(), 20);
    assert_eq!(board.generate_moves(Color::Black).len(), 20);
}

#[test]
fn test_initial_position_move_breakdown() {
    let board = Board::starting_position();
    let moves = board.generate_moves(Color::White);
    let pawn_moves = moves
        .iter()
        .filter(|next| {
            let mv = board.describe_move(next).unwrap();
            board.piece_at(mv.from()) == Some((Color::White, Piece::Pawn))
        })
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(moves.len() - pawn_moves, 4);
}

#[test]
fn test_rook_fourteen_moves_from_every_square() {
    assert!(empty_board_counts(Piece::Rook).iter().all(|&n| n == 14));
}

#[test]
fn test_empty_board_totals() {
    let total = |piece| empty_board_counts(piece).iter().sum::<usize>();
    assert_eq!(total(Piece::Knight), 336);
    assert_eq!(total(Piece::Bishop), 560);
    assert_eq!(total(Piece::Rook), 896);
    assert_eq!(total(Piece::Queen), 1456);
    assert_eq!(total(Piece::King), 420);
}

#[test]
fn test_knight_center_and_corner() {
    let counts = empty_board_counts(Piece::Knight);
    assert_eq!(counts[3 * 8 + 3], 8);
    for corner in [0, 7, 56, 63] {
        assert_eq!(counts[corner], 2);
    }
}

#[test]
fn test_rook_at_d5_destinations() {
    let board = Board::from_fen("8/8/8/3R4/8/8/8/8");
    let from = index_of(3, 3);
    let mut destinations: Vec<usize> = board
        .generate_moves(Color::White)
        .iter()
        .map(|next| board.describe_move(next).unwrap())
        .inspect(|mv| assert_eq!(mv.from().index(), from))
        .map(|mv| mv.to().index())
        .collect();
    destinations.sort_unstable();
    let mut expected: Vec<usize> = (0..8)
        .filter(|&f| f != 3)
        .map(|f| index_of(f, 3))
        .chain((0..8).filter(|&r| r != 3).map(|r| index_of(3, r)))
        .collect();
    expected.sort_unstable();
    assert_eq!(destinations, expected);
}

#[test]
fn test_middlegame_counts() {
    // kiwipete minus castling and en passant
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    assert_eq!(board.generate_moves(Color::White).len(), 46);
}

#[test]
fn test_perft_initial_position() {
    let board = Board::starting_position();
    assert_eq!(board.perft(Color::White, 1), 20);
    assert_eq!(board.perft(Color::White, 2), 400);
    assert_eq!(board.perft(Color::Black, 2), 400);
}
