use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::types::geometry::{index_of, BOARD_CELLS, EMPTY, SEPARATOR};
use super::{Board, Cell, Piece};

impl Board {
    /// Parse a board from a FEN piece-placement field.
    ///
    /// Digits expand to that many empty cells and `/` delimiters are kept
    /// in place. A full FEN string is accepted; only its first field is
    /// read. Piece counts and king presence are not checked.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let result = parse_placement(fen);
        if let Err(err) = &result {
            log_debug!("rejected FEN placement {:?}: {}", fen, err);
        }
        result
    }

    /// Parse a board from a FEN piece-placement field.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN placement")
    }

    /// Convert the board back to a FEN piece-placement field.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(BOARD_CELLS);
        let mut empty = 0;
        for idx in 0..BOARD_CELLS {
            match self.cell(idx) {
                Cell::Empty => empty += 1,
                cell => {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(cell.code() as char);
                }
            }
        }
        if empty > 0 {
            placement.push_str(&empty.to_string());
        }
        placement
    }
}

fn parse_placement(fen: &str) -> Result<Board, FenError> {
    let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut cells = [SEPARATOR; BOARD_CELLS];
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0;
        for c in rank_str.chars() {
            let (code, run) = match c {
                '1'..='9' => (EMPTY, c as usize - '0' as usize),
                _ if Piece::from_char(c).is_some() => (c as u8, 1),
                _ => return Err(FenError::InvalidPiece { char: c }),
            };
            if file + run > 8 {
                return Err(FenError::TooManyFiles {
                    rank,
                    files: file + run,
                });
            }
            for f in file..file + run {
                cells[index_of(f, rank)] = code;
            }
            file += run;
        }
        if file < 8 {
            return Err(FenError::TooFewFiles { rank, files: file });
        }
    }

    Ok(Board { cells })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
