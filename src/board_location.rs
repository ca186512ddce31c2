use std::fmt;

use crate::chess_errors::ChessErrors;

/// Number of columns and rows on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square address as `(column, row)`, both one-based in `1..=BOARD_SIZE`.
///
/// Column 1 is file `a` and row 1 is the first player's back row, so `(5, 4)`
/// prints as `e4`. A `BoardLocation` can only be built in bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    column: i8,
    row: i8,
}

impl BoardLocation {
    /// Builds a location, rejecting anything off the board.
    pub fn from_column_row(column: i8, row: i8) -> Result<Self, ChessErrors> {
        if Self::in_bounds(column, row) {
            Ok(BoardLocation { column, row })
        } else {
            Err(ChessErrors::InvalidColumnOrRow(column, row))
        }
    }

    /// Parses a square such as `"e4"`.
    pub fn from_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
        }
        Self::from_column_row((file - b'a' + 1) as i8, (rank - b'0') as i8)
    }

    #[inline]
    pub const fn column(&self) -> i8 {
        self.column
    }

    #[inline]
    pub const fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn in_bounds(column: i8, row: i8) -> bool {
        column >= 1 && column <= BOARD_SIZE && row >= 1 && row <= BOARD_SIZE
    }

    /// Steps by `(d_column, d_row)`; `None` once the step leaves the board.
    pub fn generate_moved_location_checked(&self, d_column: i8, d_row: i8) -> Option<Self> {
        let column = self.column.checked_add(d_column)?;
        let row = self.row.checked_add(d_row)?;
        Self::from_column_row(column, row).ok()
    }

    /// Zero-based index into a row-major 64-square array.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        ((self.row - 1) * BOARD_SIZE + (self.column - 1)) as usize
    }

    /// Every square on the board, row by row from `a1`.
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |column| BoardLocation { column, row }))
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + (self.column - 1) as u8), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_round_trips_through_column_row() {
        let e4 = BoardLocation::from_algebraic("e4").unwrap();
        assert_eq!((e4.column(), e4.row()), (5, 4));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(BoardLocation::from_algebraic("A1").unwrap().to_string(), "a1");
    }

    #[test]
    fn off_board_construction_is_rejected() {
        assert_eq!(
            BoardLocation::from_column_row(0, 4),
            Err(ChessErrors::InvalidColumnOrRow(0, 4))
        );
        assert!(BoardLocation::from_column_row(8, 9).is_err());
        assert!(BoardLocation::from_algebraic("i1").is_err());
        assert!(BoardLocation::from_algebraic("e10").is_err());
        assert!(BoardLocation::from_algebraic("").is_err());
    }

    #[test]
    fn moved_location_stops_at_the_edge() {
        let h8 = BoardLocation::from_algebraic("h8").unwrap();
        assert_eq!(h8.generate_moved_location_checked(1, 0), None);
        assert_eq!(h8.generate_moved_location_checked(0, 1), None);
        assert_eq!(
            h8.generate_moved_location_checked(-2, -1),
            Some(BoardLocation::from_algebraic("f7").unwrap())
        );
    }

    #[test]
    fn all_covers_sixty_four_distinct_indices() {
        let mut seen = [false; 64];
        for location in BoardLocation::all() {
            assert!(!seen[location.index()]);
            seen[location.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
