use std::fmt;

use crate::{board_location::BoardLocation, piece_class::PieceClass, piece_team::PieceTeam};

/// Stable identity of a piece: its index in the game's piece arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a chess piece with its class, team and whereabouts.
/// The board only stores `PieceId`s; this record is the single owner of
/// everything else about the piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// Arena index of this piece.
    pub id: PieceId,
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team
    pub team: PieceTeam,
    /// Current location. Meaningless once `captured` is set.
    pub location: BoardLocation,
    /// Where the piece was set up. Never changes.
    pub origin: BoardLocation,
    /// Pawn just made a two-square advance and may be taken en passant.
    pub en_passant_eligible: bool,
    pub captured: bool,
}

impl PieceRecord {
    pub fn new(id: PieceId, class: PieceClass, team: PieceTeam, location: BoardLocation) -> Self {
        PieceRecord {
            id,
            class,
            team,
            location,
            origin: location,
            en_passant_eligible: false,
            captured: false,
        }
    }

    #[inline]
    pub fn is_on_origin(&self) -> bool {
        self.location == self.origin
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        matches!(self.class, PieceClass::Pawn)
    }
}
