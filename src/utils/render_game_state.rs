//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and diagnostics
//! in text environments. Row 8 is printed at the top.

use crate::board_location::{BoardLocation, BOARD_SIZE};
use crate::game_state::game_state::GameState;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (1..=BOARD_SIZE).rev() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for column in 1..=BOARD_SIZE {
            let glyph = BoardLocation::from_column_row(column, row)
                .ok()
                .and_then(|location| game_state.piece_record_at(location))
                .map(piece_to_unicode);
            out.push(glyph.unwrap_or('·'));

            if column < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// One line per player listing the pieces they have lost, in capture order.
pub fn render_lost_pieces(game_state: &GameState) -> String {
    [PieceTeam::Light, PieceTeam::Dark]
        .iter()
        .map(|team| {
            let player = game_state.player(*team);
            let lost: String = player
                .pieces_lost
                .iter()
                .filter_map(|id| game_state.piece(*id))
                .map(piece_to_unicode)
                .collect();
            format!("{} lost: {}", player.name, lost)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn piece_to_unicode(piece: &PieceRecord) -> char {
    match (piece.team, piece.class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
