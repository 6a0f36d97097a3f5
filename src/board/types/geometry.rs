//! Index geometry of the stride-9 board encoding.
//!
//! A board is the FEN placement field with digits expanded and the seven
//! `/` rank delimiters left in place. Every rank but the last therefore
//! occupies nine cells, the ninth being a delimiter, and the whole board is
//! `8 * 9 - 1 = 71` cells long. Treating the board as rows of width
//! [`ROW_STRIDE`] makes `index % 9` the file and `index / 9` the rank, and
//! puts a sentinel at file [`SEPARATOR_FILE`] of every rank (the one past
//! the end of the last rank falls outside the board). Any one-file step off
//! the left or right edge lands on a sentinel, which is how all generators
//! detect edge wrap without decomposing indices into coordinates.

/// Width of one board row including its delimiter cell.
pub const ROW_STRIDE: usize = 9;

/// File index occupied by the rank delimiter in every row.
pub const SEPARATOR_FILE: usize = 8;

/// Total number of cells: 64 squares plus 7 delimiters.
pub const BOARD_CELLS: usize = 8 * ROW_STRIDE - 1;

/// Cell code of an empty square.
pub(crate) const EMPTY: u8 = b'_';

/// Cell code of a rank delimiter.
pub(crate) const SEPARATOR: u8 = b'/';

#[inline]
#[must_use]
pub const fn file_of(index: usize) -> usize {
    index % ROW_STRIDE
}

#[inline]
#[must_use]
pub const fn rank_of(index: usize) -> usize {
    index / ROW_STRIDE
}

/// Cell index of the square at `file`, `rank` (both 0-7).
#[inline]
#[must_use]
pub const fn index_of(file: usize, rank: usize) -> usize {
    rank * ROW_STRIDE + file
}

/// True for indices that are not playable squares: delimiter cells and
/// anything at or past the end of the board.
#[inline]
#[must_use]
pub const fn is_sentinel(index: usize) -> bool {
    index >= BOARD_CELLS || file_of(index) == SEPARATOR_FILE
}

/// A displacement in ranks and files, applied as a single index delta.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Offset {
    pub rank: isize,
    pub file: isize,
}

impl Offset {
    #[must_use]
    pub const fn new(rank: isize, file: isize) -> Self {
        Offset { rank, file }
    }

    /// The index delta: `rank * 9 + file`.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> isize {
        self.rank * ROW_STRIDE as isize + self.file
    }
}

/// Rook rays: down (+9), up (-9), left (-1), right (+1).
pub(crate) const ORTHOGONAL: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, -1),
    Offset::new(0, 1),
];

/// Bishop rays: +8, +10, -10, -8.
pub(crate) const DIAGONAL: [Offset; 4] = [
    Offset::new(1, -1),
    Offset::new(1, 1),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
];

/// Knight jumps: +19, +17, +11, +7, -19, -17, -11, -7.
pub(crate) const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
];

/// King steps: +8, +9, +10, +1, -1, -8, -9, -10.
pub(crate) const KING_STEPS: [Offset; 8] = [
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(-1, 1),
    Offset::new(-1, 0),
    Offset::new(-1, -1),
];

/// Apply `offset` to the playable square `from`.
///
/// Returns `None` when the target leaves the board: below index 0, at or
/// past [`BOARD_CELLS`], on a delimiter, or on a file that does not differ
/// from the origin's by exactly the offset's file delta (a two-file jump
/// that wrapped into the neighbouring rank).
#[inline]
#[must_use]
pub fn step(from: usize, offset: Offset) -> Option<usize> {
    debug_assert!(!is_sentinel(from), "step from sentinel index {from}");
    let target = from.checked_add_signed(offset.delta())?;
    if is_sentinel(target) {
        return None;
    }
    if file_of(target).abs_diff(file_of(from)) != offset.file.unsigned_abs() {
        return None;
    }
    Some(target)
}

/// Successive squares along `offset` from `from`, excluding `from` itself,
/// until the edge of the board.
pub(crate) fn ray(from: usize, offset: Offset) -> impl Iterator<Item = usize> {
    std::iter::successors(step(from, offset), move |&idx| step(idx, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_is_seventy_one_cells() {
        assert_eq!(BOARD_CELLS, 71);
        assert_eq!(index_of(7, 7), 70);
    }

    #[test]
    fn test_sentinels_sit_at_file_eight() {
        let sentinels: Vec<usize> = (0..BOARD_CELLS).filter(|&i| is_sentinel(i)).collect();
        assert_eq!(sentinels, vec![8, 17, 26, 35, 44, 53, 62]);
        assert!(is_sentinel(71));
    }

    #[test]
    fn test_offset_deltas_match_stride() {
        let deltas: Vec<isize> = KNIGHT_JUMPS.iter().map(|o| o.delta()).collect();
        assert_eq!(deltas, vec![19, 17, 11, 7, -19, -17, -11, -7]);
        let diag: Vec<isize> = DIAGONAL.iter().map(|o| o.delta()).collect();
        assert_eq!(diag, vec![8, 10, -10, -8]);
    }

    #[test]
    fn test_step_rejects_edge_wrap() {
        // a-file, one step left lands on the previous delimiter
        assert_eq!(step(index_of(0, 3), Offset::new(0, -1)), None);
        // h-file, one step right lands on this rank's delimiter
        assert_eq!(step(index_of(7, 3), Offset::new(0, 1)), None);
        // two-file knight jump from the a-file wraps onto the h-file
        assert_eq!(step(index_of(0, 3), Offset::new(1, -2)), None);
        assert_eq!(step(index_of(7, 3), Offset::new(-1, 2)), None);
        // off the top and bottom
        assert_eq!(step(index_of(4, 0), Offset::new(-1, 0)), None);
        assert_eq!(step(index_of(4, 7), Offset::new(1, 0)), None);
        assert_eq!(step(index_of(7, 7), Offset::new(0, 1)), None);
    }

    #[test]
    fn test_step_inside_board() {
        assert_eq!(step(index_of(3, 3), Offset::new(2, 1)), Some(index_of(4, 5)));
        assert_eq!(step(index_of(3, 3), Offset::new(-1, -1)), Some(index_of(2, 2)));
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let squares: Vec<usize> = ray(index_of(5, 2), Offset::new(1, 1)).collect();
        assert_eq!(squares, vec![index_of(6, 3), index_of(7, 4)]);
        assert_eq!(ray(index_of(0, 0), Offset::new(0, -1)).count(), 0);
        assert_eq!(ray(index_of(0, 0), Offset::new(0, 1)).count(), 7);
    }
}
