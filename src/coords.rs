//! Triangular coordinate / linear index mapping.
//!
//! The board is a triangle of rows where row `r` holds `r + 1` cells
//! (`0 <= col <= row`). Cells are stored in a flat array in row order, so
//! the cell at `(col, row)` lives at index `col + row*(row+1)/2`. The
//! inverse mapping recovers the row as the triangular root of the index.

/// Translate column and row coordinates to a location in the flat array.
///
/// Precondition: `col <= row`. The result is only a valid cell index when
/// the caller also checks it against the board size.
#[inline]
pub fn index_of(col: usize, row: usize) -> usize {
    col + row * (row + 1) / 2
}

/// The inverse of [`index_of`]: recover `(col, row)` from a flat index.
///
/// The row number is the triangular root of `i`, the column is `i` minus
/// the number of cells in all previous rows. Exact left inverse of
/// [`index_of`] for every index in range.
#[inline]
pub fn coords_of(i: usize) -> (usize, usize) {
    let row = ((((8 * i + 1) as f64).sqrt() - 1.0) / 2.0) as usize;
    let col = i - row * (row + 1) / 2;
    (col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_SIZE;

    #[test]
    fn test_roundtrip() {
        for i in 0..BOARD_SIZE {
            let (col, row) = coords_of(i);
            assert_eq!(index_of(col, row), i, "roundtrip failed for index {i}");
        }
    }

    #[test]
    fn test_row_bounds() {
        for i in 0..BOARD_SIZE {
            let (col, row) = coords_of(i);
            assert!(col <= row, "col {col} > row {row} at index {i}");
            assert!(row * (row + 1) / 2 <= i);
            assert!(i < (row + 1) * (row + 2) / 2);
        }
    }

    #[test]
    fn test_known_cells() {
        assert_eq!(index_of(0, 0), 0);
        assert_eq!(index_of(0, 1), 1);
        assert_eq!(index_of(1, 1), 2);
        assert_eq!(index_of(0, 2), 3);
        assert_eq!(index_of(2, 2), 5);
        assert_eq!(coords_of(0), (0, 0));
        assert_eq!(coords_of(4), (1, 2));
        assert_eq!(coords_of(20), (5, 5));
    }
}
