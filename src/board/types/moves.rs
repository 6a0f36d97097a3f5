//! Move descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::location::Location;

/// The (source, destination) pair of a single move.
///
/// Generation never builds these; they are recovered on demand from a
/// before/after board pair by [`Board::describe_move`](crate::board::Board::describe_move).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveDescriptor {
    from: Location,
    to: Location,
}

impl MoveDescriptor {
    #[inline]
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        MoveDescriptor { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Location {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Location {
        self.to
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
