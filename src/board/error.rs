//! Error types for board operations.

use std::fmt;

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// No placement field at all
    Empty,
    /// Character that is neither a piece letter, a digit 1-9 nor `/`
    InvalidPiece { char: char },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank describes more than 8 squares
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 squares
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN placement field"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for before/after pairs that are not a single generated move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Number of differing cells is not exactly two
    CellCountMismatch { changed: usize },
    /// Neither differing cell was vacated
    NoVacatedCell,
    /// Both differing cells were vacated
    AmbiguousVacancy,
    /// The descriptor's source square holds no piece
    EmptySource { square: String },
    /// The descriptor's source and destination are the same square
    NullMove { square: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::CellCountMismatch { changed } => {
                write!(f, "Expected exactly 2 changed cells, found {changed}")
            }
            MoveError::NoVacatedCell => write!(f, "No vacated cell between boards"),
            MoveError::AmbiguousVacancy => {
                write!(f, "Both changed cells were vacated")
            }
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::NullMove { square } => {
                write!(f, "Move from {square} to itself")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for location parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            LocationError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            LocationError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for LocationError {}
