//! Occupancy grid.
//!
//! The board is an arena of 64 squares indexed by `BoardLocation`. Each square
//! records at most one occupant by `PieceId`; the pieces themselves live in the
//! game's piece arena. Only the game state mutates occupancy, and it always
//! updates the piece record in the same call.

use crate::{board_location::BoardLocation, piece_record::PieceId};

/// Snapshot of one cell of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Square {
    pub location: BoardLocation,
    pub occupant: Option<PieceId>,
}

impl Square {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    occupants: [Option<PieceId>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { occupants: [None; 64] }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Square at `location`.
    #[inline]
    pub fn square(&self, location: BoardLocation) -> Square {
        Square {
            location,
            occupant: self.occupants[location.index()],
        }
    }

    /// Square at a raw `(column, row)`; `None` when off the board.
    pub fn lookup(&self, column: i8, row: i8) -> Option<Square> {
        BoardLocation::from_column_row(column, row)
            .ok()
            .map(|location| self.square(location))
    }

    #[inline]
    pub fn occupant(&self, location: BoardLocation) -> Option<PieceId> {
        self.occupants[location.index()]
    }

    /// Occupied squares, row by row from `a1`.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        BoardLocation::all()
            .map(|location| self.square(location))
            .filter(|square| !square.is_empty())
    }

    pub(crate) fn set_occupant(&mut self, location: BoardLocation, piece: PieceId) {
        self.occupants[location.index()] = Some(piece);
    }

    pub(crate) fn clear_occupant(&mut self, location: BoardLocation) -> Option<PieceId> {
        self.occupants[location.index()].take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_lookup_is_none() {
        let board = Board::new();
        assert_eq!(board.lookup(0, 1), None);
        assert_eq!(board.lookup(9, 9), None);
        assert_eq!(board.lookup(-3, 4), None);
        assert!(board.lookup(1, 1).is_some_and(|square| square.is_empty()));
    }

    #[test]
    fn set_and_clear_occupant() {
        let mut board = Board::new();
        let d4 = BoardLocation::from_algebraic("d4").unwrap();
        board.set_occupant(d4, PieceId(3));
        assert_eq!(board.lookup(4, 4).and_then(|s| s.occupant), Some(PieceId(3)));
        assert_eq!(board.occupied_squares().count(), 1);
        assert_eq!(board.clear_occupant(d4), Some(PieceId(3)));
        assert_eq!(board.occupant(d4), None);
    }
}
