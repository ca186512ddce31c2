//! Shared ray walk for the pieces that move along fixed directions.
//!
//! Queen, rook, bishop and king differ only in their direction lists and in
//! how far they may travel along each one.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::piece_record::PieceRecord;

/// A unit step as `(d_column, d_row)`.
pub type Direction = (i8, i8);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

pub const COMPASS_DIRECTIONS: [Direction; 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Walks from `piece` along `direction`, at most `max_distance` squares.
///
/// Stops before leaving the board or reaching a friendly piece. An enemy
/// square is included and ends the walk.
pub fn move_path(
    game_state: &GameState,
    piece: &PieceRecord,
    direction: Direction,
    max_distance: u8,
    out: &mut Vec<BoardLocation>,
) {
    let mut current = piece.location;
    for _ in 0..max_distance {
        let Some(next) = current.generate_moved_location_checked(direction.0, direction.1) else {
            break;
        };
        match game_state.piece_record_at(next) {
            Some(other) if other.team == piece.team => break,
            Some(_) => {
                out.push(next);
                break;
            }
            None => out.push(next),
        }
        current = next;
    }
}

pub fn generate_sliding_moves(
    game_state: &GameState,
    piece: &PieceRecord,
    directions: &[Direction],
    max_distance: u8,
    out: &mut Vec<BoardLocation>,
) {
    for direction in directions {
        move_path(game_state, piece, *direction, max_distance, out);
    }
}
