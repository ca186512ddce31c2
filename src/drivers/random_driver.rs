//! Random-move driver.
//!
//! Selects uniformly from every move available to the side to move. Used for
//! self-play, diagnostics and benchmarks.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board_location::BoardLocation;
use crate::drivers::driver_trait::Driver;
use crate::game_state::game_state::GameState;
use crate::moves::move_generator::generate_all_moves;
use crate::piece_record::PieceId;

/// Seeded so a match can be replayed.
pub struct RandomDriver {
    rng: StdRng,
}

impl RandomDriver {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Driver for RandomDriver {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<(PieceId, BoardLocation)> {
        let candidates = generate_all_moves(game_state);
        candidates.as_slice().choose(&mut self.rng).copied()
    }
}
