use crate::{piece_record::PieceId, piece_team::PieceTeam};

/// One of the two participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub team: PieceTeam,
    /// Pieces this player has lost, in capture order. Append-only.
    pub pieces_lost: Vec<PieceId>,
}

impl Player {
    pub fn new(name: impl Into<String>, team: PieceTeam) -> Self {
        Player {
            name: name.into(),
            team,
            pieces_lost: Vec::new(),
        }
    }
}
