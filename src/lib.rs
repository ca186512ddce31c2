//! Crate root module declarations for the simple_chess rules engine.
//!
//! The core is coordinate based: a board of occupancy, a piece arena, per-piece
//! move generation and a single turn resolver. Rendering, input translation
//! and game-loop scheduling belong to an adapter that talks to `GameState`
//! with already-resolved board coordinates.

pub mod apply_move_to_game;
pub mod board;
pub mod board_location;
pub mod chess_errors;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;
pub mod player;

pub mod game_state {
    pub mod chess_rules;
    pub mod game_config;
    pub mod game_state;
    pub mod turn_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod drivers {
    pub mod driver_trait;
    pub mod random_driver;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_game_state;
}
