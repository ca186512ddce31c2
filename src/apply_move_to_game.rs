use tracing::debug;

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::game_state::turn_record::TurnRecord;
use crate::moves::move_generator::generate_moves;
use crate::piece_record::PieceId;

/// Result of a move attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved to an empty square.
    Moved,
    /// The piece took an enemy piece, directly or en passant.
    Captured,
    /// Nothing changed. The selection is dropped and the same player is
    /// still to move.
    Illegal,
}

impl MoveOutcome {
    #[inline]
    pub fn is_resolved(self) -> bool {
        !matches!(self, MoveOutcome::Illegal)
    }
}

/// Resolves one turn: `piece` tries to move to `destination`.
///
/// The destination must be in the piece's move set: the cached one when this
/// piece is the current selection, otherwise a freshly generated one (the
/// same thing, since nothing mutates the game between selection and
/// attempt). The piece must be live and belong to the side to move, and the
/// destination must not hold a friendly piece. Any failed check returns
/// `Illegal` before a single field is touched.
///
/// A resolved move then, in order:
/// * closes the en-passant window and clears every pawn's eligibility,
/// * captures the destination occupant, or, for a pawn moving diagonally
///   onto an empty square, the eligible enemy pawn beside it,
/// * moves the piece,
/// * reopens the window if a pawn double stepped from its origin,
/// * records the turn and hands the move to the other player.
pub fn apply_move_to_game(game: &mut GameState, piece: PieceId, destination: BoardLocation) -> MoveOutcome {
    let selection = game.selection.take();

    let Some(mover) = game.piece(piece).copied() else {
        debug!(piece = %piece, "rejected move: unknown piece");
        return MoveOutcome::Illegal;
    };
    if mover.captured || mover.team != game.active {
        debug!(piece = %piece, team = ?mover.team, "rejected move: piece not playable");
        return MoveOutcome::Illegal;
    }

    let move_set = match selection {
        Some(selected) if selected.piece == piece => selected.moves,
        _ => generate_moves(game, piece),
    };
    if !move_set.contains(&destination) {
        debug!(piece = %piece, from = %mover.location, to = %destination, "rejected move: not in move set");
        return MoveOutcome::Illegal;
    }

    let target = game.board.occupant(destination);
    if target.is_some_and(|id| game.pieces[id.0].team == mover.team) {
        debug!(piece = %piece, to = %destination, "rejected move: own piece on destination");
        return MoveOutcome::Illegal;
    }

    // From here on the move is legal and is applied in full.
    let en_passant_victim = if game.en_passant_open {
        game.live_pieces().find(|p| p.en_passant_eligible).map(|p| p.id)
    } else {
        None
    };
    game.en_passant_open = false;
    for record in game.pieces.iter_mut() {
        record.en_passant_eligible = false;
    }

    let from = mover.location;
    let mut captured = None;
    let mut en_passant = false;

    if let Some(occupant) = target {
        game.capture_piece(occupant);
        captured = Some(occupant);
    } else if mover.is_pawn() && destination.column() != from.column() {
        let beside = BoardLocation::from_column_row(destination.column(), from.row()).ok();
        if let Some(victim) = en_passant_victim.filter(|id| Some(game.pieces[id.0].location) == beside) {
            game.capture_piece(victim);
            captured = Some(victim);
            en_passant = true;
        }
    }

    game.relocate_piece(piece, destination);

    let double_step = mover.is_pawn() && mover.is_on_origin() && (destination.row() - from.row()).abs() == 2;
    if double_step {
        game.pieces[piece.0].en_passant_eligible = true;
        game.en_passant_open = true;
    }

    game.history.push(TurnRecord {
        mover: piece,
        class: mover.class,
        team: mover.team,
        from,
        to: destination,
        captured,
        en_passant,
        double_step,
        played_at: chrono::Utc::now(),
    });
    game.active = game.active.opposite();

    debug!(
        piece = %piece,
        class = mover.class.name(),
        from = %from,
        to = %destination,
        captured = ?captured,
        en_passant,
        double_step,
        "resolved move"
    );

    if captured.is_some() {
        MoveOutcome::Captured
    } else {
        MoveOutcome::Moved
    }
}
