/// Represents the type (class) of a chess piece.
/// Used to pick the movement rules a piece follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

impl PieceClass {
    pub const fn name(self) -> &'static str {
        match self {
            PieceClass::Pawn => "Pawn",
            PieceClass::Knight => "Knight",
            PieceClass::Bishop => "Bishop",
            PieceClass::Rook => "Rook",
            PieceClass::Queen => "Queen",
            PieceClass::King => "King",
        }
    }
}
