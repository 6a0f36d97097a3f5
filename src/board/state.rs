use std::fmt;

use once_cell::sync::Lazy;

use super::types::geometry::{is_sentinel, BOARD_CELLS, EMPTY, SEPARATOR};
use super::{Cell, Color, Location, Piece};

/// FEN placement field of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| Board::from_fen(STARTING_FEN));

/// One chess position in the stride-9 cell encoding.
///
/// A `Board` is an immutable value: every move application returns a new
/// board and leaves its parent untouched. It carries no side to move;
/// callers supply that to each generation call.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [u8; BOARD_CELLS],
}

impl Board {
    /// A board with no pieces, delimiters in place.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [EMPTY; BOARD_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            if is_sentinel(idx) {
                *cell = SEPARATOR;
            }
        }
        Board { cells }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        *STARTING_POSITION
    }

    /// Rebuild a board from its raw cell codes, checking that every
    /// delimiter sits at file 8 and every other cell is a piece or empty.
    #[must_use]
    pub fn from_cells(bytes: &[u8]) -> Option<Self> {
        let cells: [u8; BOARD_CELLS] = bytes.try_into().ok()?;
        for (idx, &code) in cells.iter().enumerate() {
            let cell = Cell::from_code(code)?;
            if is_sentinel(idx) != (cell == Cell::Separator) {
                return None;
            }
        }
        Some(Board { cells })
    }

    /// Raw cell codes: piece letters, `_` for empty and `/` for delimiters.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8; BOARD_CELLS] {
        &self.cells
    }

    /// Decoded contents of the cell at `index`. Indices past the end of the
    /// board read as delimiters.
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells
            .get(index)
            .and_then(|&code| Cell::from_code(code))
            .unwrap_or(Cell::Separator)
    }

    #[must_use]
    pub fn piece_at(&self, location: Location) -> Option<(Color, Piece)> {
        match self.cell(location.index()) {
            Cell::Piece(color, piece) => Some((color, piece)),
            _ => None,
        }
    }

    /// Indices at which `self` and `other` differ, in index order.
    pub fn differing_cells<'a>(&'a self, other: &'a Board) -> impl Iterator<Item = usize> + 'a {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(idx, _)| idx)
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        (0..BOARD_CELLS)
            .filter(|&idx| matches!(self.cell(idx), Cell::Piece(c, _) if c == color))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board")
            .field(&String::from_utf8_lossy(&self.cells))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.cells))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Board::from_cells(s.as_bytes())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid board cells '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_layout() {
        let board = Board::empty();
        assert_eq!(board.cell(8), Cell::Separator);
        assert_eq!(board.cell(0), Cell::Empty);
        assert_eq!(board.cell(70), Cell::Empty);
        assert_eq!(board.cell(71), Cell::Separator);
        assert_eq!(board.piece_count(Color::White), 0);
    }

    #[test]
    fn test_starting_position_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.piece_count(Color::White), 16);
        assert_eq!(board.piece_count(Color::Black), 16);
        let e1 = "e1".parse().unwrap();
        assert_eq!(board.piece_at(e1), Some((Color::White, Piece::King)));
        let d8 = "d8".parse().unwrap();
        assert_eq!(board.piece_at(d8), Some((Color::Black, Piece::Queen)));
    }

    #[test]
    fn test_from_cells_round_trip() {
        let board = Board::starting_position();
        assert_eq!(Board::from_cells(board.cells()), Some(board));
    }

    #[test]
    fn test_from_cells_rejects_misplaced_delimiter() {
        let mut cells = *Board::empty().cells();
        cells.swap(7, 8);
        assert_eq!(Board::from_cells(&cells), None);
        assert_eq!(Board::from_cells(&cells[..70]), None);
    }

    #[test]
    fn test_differing_cells() {
        let a = Board::empty();
        let mut b = a;
        b.cells[3] = b'Q';
        b.cells[40] = b'k';
        assert_eq!(a.differing_cells(&b).collect::<Vec<_>>(), vec![3, 40]);
    }
}
