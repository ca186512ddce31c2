//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Normal play never
//! produces one: an illegal destination is a `MoveOutcome::Illegal`, and
//! out-of-range lookups return `None`. Errors are reserved for malformed input
//! (bad coordinates, unparsable algebraic strings) and for setups that would
//! break the board invariants before the first move is ever played.

use thiserror::Error;

use crate::{board_location::BoardLocation, piece_team::PieceTeam};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A `(column, row)` pair outside `1..=8`.
    ///
    /// Payload: (column, row) as given by the caller.
    #[error("location ({0}, {1}) is off the board")]
    InvalidColumnOrRow(i8, i8),

    /// An algebraic square string (for example `"e4"`) failed to parse.
    #[error("invalid algebraic square `{0}`")]
    InvalidAlgebraicString(String),

    /// Setup tried to place two pieces on one square.
    #[error("square {0} is already occupied")]
    SquareAlreadyOccupied(BoardLocation),

    /// A checked setup where a side has no king.
    #[error("{0:?} has no king")]
    MissingKing(PieceTeam),

    /// A checked setup where a side has more than one king.
    #[error("{0:?} has more than one king")]
    DuplicateKing(PieceTeam),

    /// The board's occupancy and a piece's recorded location disagree.
    ///
    /// This indicates a corrupted state and is not recoverable.
    #[error("occupancy mismatch at {0}")]
    OccupancyMismatch(BoardLocation),

    /// A piece id that does not name any piece in this game.
    #[error("unknown piece id {0}")]
    UnknownPiece(usize),
}
