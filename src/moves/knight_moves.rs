use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::piece_record::PieceRecord;

/// Knight jumps as `(d_column, d_row)`, counter-clockwise from east-north-east.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn generate_knight_moves(game_state: &GameState, piece: &PieceRecord, out: &mut Vec<BoardLocation>) {
    for (d_column, d_row) in KNIGHT_OFFSETS {
        let Some(to) = piece.location.generate_moved_location_checked(d_column, d_row) else {
            continue;
        };
        match game_state.piece_record_at(to) {
            Some(other) if other.team == piece.team => {}
            _ => out.push(to),
        }
    }
}
