//! Pawn move generation.
//!
//! Pawns are the only asymmetric piece: they advance away from their home
//! side, never capture straight ahead, capture one square diagonally forward,
//! and may take a pawn that has just double stepped past them (en passant)
//! while the game's en-passant window is open.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::piece_record::PieceRecord;

/// Forward squares a pawn may walk on its first move.
pub const PAWN_FIRST_MOVE_DISTANCE: u8 = 2;
pub const PAWN_MOVE_DISTANCE: u8 = 1;

/// Square one step forward and `d_column` sideways of `location`.
#[inline]
pub fn pawn_step(location: BoardLocation, piece: &PieceRecord, d_column: i8) -> Option<BoardLocation> {
    location.generate_moved_location_checked(d_column, piece.team.forward())
}

pub fn generate_pawn_moves(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    generate_pawn_advances(game_state, piece, out);
    generate_pawn_captures(game_state, piece, out);
    if game_state.is_en_passant_open() {
        generate_pawn_en_passant(game_state, piece, out);
    }
}

/// Straight ahead; any occupant blocks.
fn generate_pawn_advances(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    let max_distance = if piece.is_on_origin() {
        PAWN_FIRST_MOVE_DISTANCE
    } else {
        PAWN_MOVE_DISTANCE
    };
    let mut current = piece.location;
    for _ in 0..max_distance {
        let Some(next) = pawn_step(current, piece, 0) else {
            break;
        };
        if game_state.piece_at(next).is_some() {
            break;
        }
        out.push(next);
        current = next;
    }
}

fn generate_pawn_captures(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    for d_column in [-1, 1] {
        let Some(to) = pawn_step(piece.location, piece, d_column) else {
            continue;
        };
        if game_state
            .piece_record_at(to)
            .is_some_and(|other| other.team != piece.team)
        {
            out.push(to);
        }
    }
}

/// Looks left and right for an enemy pawn that just double stepped, and adds
/// the empty square behind it.
fn generate_pawn_en_passant(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    for d_column in [-1, 1] {
        let Some(beside) = piece.location.generate_moved_location_checked(d_column, 0) else {
            continue;
        };
        let takeable = game_state.piece_record_at(beside).is_some_and(|other| {
            other.is_pawn() && other.team != piece.team && other.en_passant_eligible
        });
        if !takeable {
            continue;
        }
        if let Some(behind) = pawn_step(piece.location, piece, d_column) {
            if game_state.piece_at(behind).is_none() {
                out.push(behind);
            }
        }
    }
}
