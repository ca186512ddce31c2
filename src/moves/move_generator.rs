//! Per-piece move set dispatch.
//!
//! The move set of a piece is every square it may move to under its movement
//! rules, without any king-safety filtering. It is computed from the current
//! board and the en-passant window only; generating moves never mutates the
//! game.

use tracing::trace;

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::{PieceId, PieceRecord};

/// Move set for `piece`. Unknown and captured pieces have none.
pub fn generate_moves(game_state: &GameState, piece: PieceId) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    if let Some(record) = game_state.piece(piece).filter(|p| !p.captured) {
        generate_moves_for_record(game_state, record, &mut out);
        trace!(
            piece = %piece,
            class = record.class.name(),
            from = %record.location,
            count = out.len(),
            "generated move set"
        );
    }
    out
}

pub fn generate_moves_for_record(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(game_state, piece, out),
        PieceClass::Knight => generate_knight_moves(game_state, piece, out),
        PieceClass::Bishop => generate_bishop_moves(game_state, piece, out),
        PieceClass::Rook => generate_rook_moves(game_state, piece, out),
        PieceClass::Queen => generate_queen_moves(game_state, piece, out),
        PieceClass::King => generate_king_moves(game_state, piece, out),
    }
}

/// Every `(piece, destination)` pair available to the side to move.
pub fn generate_all_moves(game_state: &GameState) -> Vec<(PieceId, BoardLocation)> {
    let mut all = Vec::new();
    let mut out = Vec::new();
    for piece in game_state
        .live_pieces()
        .filter(|p| p.team == game_state.active_team())
    {
        out.clear();
        generate_moves_for_record(game_state, piece, &mut out);
        all.extend(out.iter().map(|to| (piece.id, *to)));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_config::GameConfig;
    use std::collections::HashSet;

    #[test]
    fn opening_position_offers_twenty_moves() {
        let game = GameState::new_game(&GameConfig::default());
        assert_eq!(generate_all_moves(&game).len(), 20);
    }

    #[test]
    fn move_sets_have_no_duplicates_or_friendly_targets() {
        let game = GameState::new_game(&GameConfig::default());
        for piece in game.live_pieces() {
            let moves = generate_moves(&game, piece.id);
            let unique: HashSet<_> = moves.iter().collect();
            assert_eq!(unique.len(), moves.len());
            for to in moves {
                assert!(game
                    .piece_record_at(to)
                    .map_or(true, |other| other.team != piece.team));
            }
        }
    }

    #[test]
    fn unknown_piece_has_no_moves() {
        let game = GameState::new_game(&GameConfig::default());
        assert!(generate_moves(&game, PieceId(999)).is_empty());
    }
}
