use chrono::{DateTime, Utc};

use crate::{
    board_location::BoardLocation, piece_class::PieceClass, piece_record::PieceId,
    piece_team::PieceTeam,
};

/// One resolved turn, appended to the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub mover: PieceId,
    pub class: PieceClass,
    pub team: PieceTeam,
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// Piece taken this turn, including a pawn taken en passant.
    pub captured: Option<PieceId>,
    pub en_passant: bool,
    pub double_step: bool,
    pub played_at: DateTime<Utc>,
}
