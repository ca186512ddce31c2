//! Seeded random self-play from the starting position.
//!
//! Run with:
//! `cargo run --release -- --plies 80 --seed 1234`
//! `RUST_LOG=debug cargo run -- --verbose`

use tracing_subscriber::EnvFilter;

use simple_chess::drivers::random_driver::RandomDriver;
use simple_chess::game_state::game_config::GameConfig;
use simple_chess::game_state::game_state::GameState;
use simple_chess::utils::match_harness::{play_match, MatchConfig};
use simple_chess::utils::render_game_state::{render_game_state, render_lost_pieces};

struct Args {
    seed: u64,
    config: MatchConfig,
}

fn parse_args() -> Result<Args, String> {
    let mut seed = 0;
    let mut config = MatchConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--plies" => {
                let value = args.next().ok_or("--plies needs a value")?;
                config.max_plies = value.parse().map_err(|e| format!("bad --plies `{value}`: {e}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = value.parse().map_err(|e| format!("bad --seed `{value}`: {e}"))?;
            }
            "--verbose" | "-v" => config.verbose = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(Args { seed, config })
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Args { seed, config } = parse_args()?;
    let mut game = GameState::new_game(&GameConfig::default());
    let mut light = RandomDriver::seeded(seed);
    let mut dark = RandomDriver::seeded(seed.wrapping_add(1));

    let summary = play_match(&mut game, &mut light, &mut dark, &config);
    game.validate().map_err(|e| e.to_string())?;

    println!("{}", render_game_state(&game));
    println!("{}", render_lost_pieces(&game));
    println!("{}", summary.report());
    println!("{} to move", game.active_player().name);
    Ok(())
}
