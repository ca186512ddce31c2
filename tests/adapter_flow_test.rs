use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simple_chess::apply_move_to_game::MoveOutcome;
use simple_chess::board_location::BoardLocation;
use simple_chess::drivers::driver_trait::Driver;
use simple_chess::drivers::random_driver::RandomDriver;
use simple_chess::game_state::game_config::GameConfig;
use simple_chess::game_state::game_state::GameState;
use simple_chess::piece_class::PieceClass;
use simple_chess::piece_team::PieceTeam;

fn loc(column: i8, row: i8) -> BoardLocation {
    BoardLocation::from_column_row(column, row).unwrap()
}

fn assert_consistent(game: &GameState) {
    for piece in game.live_pieces() {
        assert_eq!(game.piece_at(piece.location), Some(piece.id));
    }
    for square in game.board().occupied_squares() {
        let occupant = game.piece(square.occupant.unwrap()).unwrap();
        assert_eq!(occupant.location, square.location);
        assert!(!occupant.captured);
    }
}

#[test]
fn en_passant_after_dark_double_step() {
    let mut game = GameState::from_layout(
        &GameConfig::default(),
        &[
            (PieceClass::King, PieceTeam::Light, loc(1, 1)),
            (PieceClass::King, PieceTeam::Dark, loc(8, 8)),
            (PieceClass::Pawn, PieceTeam::Light, loc(5, 5)),
            (PieceClass::Pawn, PieceTeam::Dark, loc(6, 7)),
        ],
    )
    .unwrap()
    .with_active_team(PieceTeam::Dark);

    let dark_pawn = game.piece_at(loc(6, 7)).unwrap();
    let light_pawn = game.piece_at(loc(5, 5)).unwrap();

    let selection = game.select_piece(loc(6, 7)).unwrap();
    assert!(selection.moves.contains(&loc(6, 5)));
    assert_eq!(game.attempt_move(dark_pawn, loc(6, 5)), MoveOutcome::Moved);
    assert!(game.is_en_passant_open());

    let moves = game.select_piece(loc(5, 5)).unwrap().moves.clone();
    assert!(moves.contains(&loc(6, 6)));
    assert_eq!(game.attempt_move(light_pawn, loc(6, 6)), MoveOutcome::Captured);

    assert_eq!(game.piece_at(loc(6, 5)), None);
    assert_eq!(game.piece_at(loc(6, 6)), Some(light_pawn));
    assert!(game.piece(dark_pawn).unwrap().captured);
    assert_eq!(game.lost_pieces(PieceTeam::Dark), &[dark_pawn]);
    assert_consistent(&game);
}

#[test]
fn active_player_toggles_only_on_resolved_moves() {
    let mut game = GameState::new_game(&GameConfig::default());
    let mut driver = RandomDriver::seeded(99);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..80 {
        let team_before = game.active_team();

        // A random destination outside the move set must be rejected untouched.
        let (piece, _) = driver.choose_move(&game).unwrap();
        let moves = game.generate_moves(piece);
        let stray = loc(rng.random_range(1..=8), rng.random_range(1..=8));
        if !moves.contains(&stray) {
            let board_before = game.board().clone();
            assert_eq!(game.attempt_move(piece, stray), MoveOutcome::Illegal);
            assert_eq!(game.active_team(), team_before);
            assert_eq!(game.board(), &board_before);
        }

        let (piece, to) = driver.choose_move(&game).unwrap();
        let outcome = game.attempt_move(piece, to);
        assert!(outcome.is_resolved());
        assert_eq!(game.active_team(), team_before.opposite());
        assert_consistent(&game);
    }
}

#[test]
fn captured_pieces_appear_once_in_owner_lost_list() {
    let mut game = GameState::new_game(&GameConfig::default());
    let mut driver = RandomDriver::seeded(2024);

    for _ in 0..200 {
        let Some((piece, to)) = driver.choose_move(&game) else {
            break;
        };
        let victim = game.piece_at(to);
        if game.attempt_move(piece, to) == MoveOutcome::Captured {
            let record = game.history().last().unwrap();
            let captured = record.captured.unwrap();
            if !record.en_passant {
                assert_eq!(victim, Some(captured));
            }
            let owner = game.piece(captured).unwrap().team;
            let lost = game.lost_pieces(owner);
            assert_eq!(lost.iter().filter(|id| **id == captured).count(), 1);
            assert!(game.live_pieces().all(|p| p.id != captured));
        }
    }
    assert_consistent(&game);
}

#[test]
fn deselect_is_a_no_op_for_game_state() {
    let mut game = GameState::new_game(&GameConfig::default());
    game.select_piece(BoardLocation::from_algebraic("g1").unwrap());
    game.deselect();
    assert!(game.selection().is_none());
    assert_eq!(game.active_player().team, PieceTeam::Light);
    assert!(game.history().is_empty());
}
