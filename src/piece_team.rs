/// Represents the team (side) owning a piece.
/// Light starts on rows 1 and 2 and moves first; Dark starts on rows 7 and 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    /// The light side.
    Light,
    /// The dark side.
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Row step of a pawn advancing away from this team's home side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => -1,
        }
    }
}
