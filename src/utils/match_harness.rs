//! Minimal head-to-head match harness for local testing.
//!
//! Runs two `Driver` implementations against each other through the same
//! select-then-attempt flow an interactive adapter uses. There is no win
//! detection, so a match ends at the ply limit or when the side to move has
//! nothing to play.

use tracing::{info, warn};

use crate::apply_move_to_game::MoveOutcome;
use crate::drivers::driver_trait::Driver;
use crate::game_state::game_state::GameState;
use crate::piece_team::PieceTeam;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Log every resolved turn at `info`.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 120,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub plies_played: u16,
    pub captures: u16,
    pub en_passant_captures: u16,
    pub illegal_attempts: u16,
    /// The side to move had no moves before the ply limit.
    pub stalled: bool,
}

impl MatchSummary {
    pub fn report(&self) -> String {
        format!(
            "plies={} captures={} en_passant={} illegal={} stalled={}",
            self.plies_played, self.captures, self.en_passant_captures, self.illegal_attempts, self.stalled
        )
    }
}

/// Plays up to `config.max_plies` move attempts on `game`.
pub fn play_match(
    game: &mut GameState,
    light: &mut dyn Driver,
    dark: &mut dyn Driver,
    config: &MatchConfig,
) -> MatchSummary {
    let mut summary = MatchSummary::default();

    for _ in 0..config.max_plies {
        let driver: &mut dyn Driver = match game.active_team() {
            PieceTeam::Light => &mut *light,
            PieceTeam::Dark => &mut *dark,
        };
        let Some((piece, destination)) = driver.choose_move(game) else {
            info!(team = ?game.active_team(), driver = driver.name(), "no move available, stopping");
            summary.stalled = true;
            break;
        };

        match game.piece_checked(piece) {
            Ok(record) => {
                let from = record.location;
                game.select_piece(from);
            }
            Err(err) => warn!(driver = driver.name(), %err, "driver named a piece outside this game"),
        }
        match game.attempt_move(piece, destination) {
            MoveOutcome::Illegal => {
                warn!(driver = driver.name(), piece = %piece, to = %destination, "driver chose an illegal move");
                summary.illegal_attempts += 1;
                continue;
            }
            MoveOutcome::Captured => summary.captures += 1,
            MoveOutcome::Moved => {}
        }
        summary.plies_played += 1;

        if let Some(record) = game.history().last() {
            if record.en_passant {
                summary.en_passant_captures += 1;
            }
            if config.verbose {
                info!(
                    ply = summary.plies_played,
                    team = ?record.team,
                    class = record.class.name(),
                    from = %record.from,
                    to = %record.to,
                    captured = record.captured.is_some(),
                    played_at = %record.played_at.format("%H:%M:%S%.3f"),
                    "turn"
                );
            }
        }
    }

    summary
}
