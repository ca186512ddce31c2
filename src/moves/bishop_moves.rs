use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::moves::sliding_moves::{generate_sliding_moves, DIAGONAL_DIRECTIONS};
use crate::piece_record::PieceRecord;

pub const BISHOP_MAX_DISTANCE: u8 = 8;

#[inline]
pub fn generate_bishop_moves(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    generate_sliding_moves(game_state, piece, &DIAGONAL_DIRECTIONS, BISHOP_MAX_DISTANCE, out);
}
