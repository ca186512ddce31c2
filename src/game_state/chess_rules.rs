//! Canonical setup constants.
//!
//! The starting layout, given per side as `(class, column)` for the back row.
//! Pawns fill the row in front of it.

use crate::piece_class::PieceClass;

/// Back-row layout shared by both sides, as `(class, column)`.
pub const BACK_ROW_LAYOUT: [(PieceClass, i8); 8] = [
    (PieceClass::Rook, 1),
    (PieceClass::Knight, 2),
    (PieceClass::Bishop, 3),
    (PieceClass::King, 4),
    (PieceClass::Queen, 5),
    (PieceClass::Bishop, 6),
    (PieceClass::Knight, 7),
    (PieceClass::Rook, 8),
];

pub const LIGHT_BACK_ROW: i8 = 1;
pub const LIGHT_PAWN_ROW: i8 = 2;
pub const DARK_PAWN_ROW: i8 = 7;
pub const DARK_BACK_ROW: i8 = 8;
