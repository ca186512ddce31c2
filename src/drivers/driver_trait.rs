//! Driver abstraction used by the match harness and the binary.
//!
//! A driver stands in for whatever decides moves outside the core: a human
//! behind a UI, a script, or a random mover.

use crate::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::piece_record::PieceId;

pub trait Driver {
    fn name(&self) -> &str;

    /// Picks a piece of the side to move and a destination for it. `None`
    /// means the driver has nothing to play.
    fn choose_move(&mut self, game_state: &GameState) -> Option<(PieceId, BoardLocation)>;
}
