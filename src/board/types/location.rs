//! Board locations.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::{file_of, index_of, is_sentinel, rank_of};
use crate::board::error::LocationError;

/// A square as (file, rank), both 0-7.
///
/// Rank 0 is the first rank written in a FEN placement field (the eighth
/// rank in algebraic notation), so `Location::new(4, 6)` is e2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    rank: usize,
    file: usize,
}

impl Location {
    /// Create a new location with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Location { rank, file })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank
    }

    /// Cell index of this location in the board encoding.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        index_of(self.file, self.rank)
    }

    /// Location of a playable cell index; `None` for delimiters and
    /// out-of-range indices.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if is_sentinel(index) {
            None
        } else {
            Some(Location {
                rank: rank_of(index),
                file: file_of(index),
            })
        }
    }

    /// Location of an index already known to be a playable square.
    #[inline]
    #[must_use]
    pub(crate) const fn from_square_index(index: usize) -> Self {
        debug_assert!(!is_sentinel(index));
        Location {
            rank: rank_of(index),
            file: file_of(index),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file as u8 + b'a') as char, 8 - self.rank)
    }
}

impl TryFrom<(usize, usize)> for Location {
    type Error = LocationError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(LocationError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(LocationError::RankOutOfBounds { rank });
        }
        Ok(Location { rank, file })
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LocationError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (b'8' - bytes[1]) as usize,
            _ => return Err(invalid()),
        };
        Ok(Location { rank, file })
    }
}
