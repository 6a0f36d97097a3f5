use std::env;
use std::process::ExitCode;

use stride_movegen::board::{Board, Color};

fn parse_side(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Color::White),
        "b" | "black" => Some(Color::Black),
        _ => None,
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("usage: stride_movegen <fen-placement> <white|black> [perft-depth]");
        return ExitCode::FAILURE;
    }

    let board = match Board::try_from_fen(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let Some(side) = parse_side(&args[2]) else {
        eprintln!("error: side must be 'white' or 'black', found '{}'", args[2]);
        return ExitCode::FAILURE;
    };

    if let Some(depth) = args.get(3) {
        let Ok(depth) = depth.parse::<usize>() else {
            eprintln!("error: invalid perft depth '{depth}'");
            return ExitCode::FAILURE;
        };
        println!("perft {depth}: {}", board.perft(side, depth));
        return ExitCode::SUCCESS;
    }

    let moves = board.generate_moves(side);
    println!("side_to_move: {side}");
    println!("moves: {}", moves.len());
    for next in &moves {
        match board.describe_move(next) {
            Ok(mv) => println!("{mv} {next}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
