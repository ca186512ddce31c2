//! King steps: the queen's directions, one square at a time.
//!
//! No castling and no check filtering; a king may step next to, or onto,
//! anything an enemy piece attacks.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{generate_sliding_moves, COMPASS_DIRECTIONS};
use crate::piece_record::PieceRecord;

pub const KING_MAX_DISTANCE: u8 = 1;

#[inline]
pub fn generate_king_moves(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    generate_sliding_moves(game_state, piece, &COMPASS_DIRECTIONS, KING_MAX_DISTANCE, out);
}
