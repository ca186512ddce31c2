//! Core game state.
//!
//! `GameState` is the central model of the engine. It owns the piece arena,
//! the occupancy board, both players, the active side, the shared en-passant
//! window and the turn history. Squares refer to pieces by `PieceId`, and a
//! piece's location and its square's occupant are only ever changed together
//! (see `relocate_piece` and `capture_piece`), so the two views cannot drift.
//!
//! Mutation during play goes exclusively through `attempt_move`; everything
//! else here is read-only or part of setup.

use tracing::info;

use crate::apply_move_to_game::{apply_move_to_game, MoveOutcome};
use crate::board::{Board, Square};
use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::turn_record::TurnRecord;
use crate::moves::move_generator::generate_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::{PieceId, PieceRecord};
use crate::piece_team::PieceTeam;
use crate::player::Player;

/// A piece to place during setup.
pub type LayoutEntry = (PieceClass, PieceTeam, BoardLocation);

/// A picked-up piece and the move set generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub moves: Vec<BoardLocation>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    /// Every piece ever placed, indexed by `PieceId`. Captured pieces stay
    /// here with `captured` set.
    pub(crate) pieces: Vec<PieceRecord>,
    pub(crate) players: [Player; 2],
    pub(crate) active: PieceTeam,
    /// Open for exactly the move attempt after a pawn double step.
    pub(crate) en_passant_open: bool,
    pub(crate) selection: Option<Selection>,
    pub(crate) history: Vec<TurnRecord>,
}

impl GameState {
    fn empty(config: &GameConfig) -> Self {
        Self {
            board: Board::new(),
            pieces: Vec::new(),
            players: [
                Player::new(config.light_name.clone(), PieceTeam::Light),
                Player::new(config.dark_name.clone(), PieceTeam::Dark),
            ],
            active: PieceTeam::Light,
            en_passant_open: false,
            selection: None,
            history: Vec::new(),
        }
    }

    /// Standard 32-piece starting position, light to move.
    pub fn new_game(config: &GameConfig) -> Self {
        let mut game = Self::empty(config);
        for (team, back_row, pawn_row) in [
            (PieceTeam::Light, LIGHT_BACK_ROW, LIGHT_PAWN_ROW),
            (PieceTeam::Dark, DARK_BACK_ROW, DARK_PAWN_ROW),
        ] {
            for (class, column) in BACK_ROW_LAYOUT {
                game.place_in_bounds(class, team, column, back_row);
            }
            for column in 1..=8 {
                game.place_in_bounds(PieceClass::Pawn, team, column, pawn_row);
            }
        }
        info!(
            light = %game.players[0].name,
            dark = %game.players[1].name,
            pieces = game.pieces.len(),
            "new game set up"
        );
        game
    }

    /// Custom position with light to move. Rejects double occupancy and any
    /// side without exactly one king.
    pub fn from_layout(config: &GameConfig, layout: &[LayoutEntry]) -> Result<Self, ChessErrors> {
        let game = Self::from_layout_no_rule_checking(config, layout)?;
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            let kings = game
                .live_pieces()
                .filter(|p| p.team == team && matches!(p.class, PieceClass::King))
                .count();
            match kings {
                0 => return Err(ChessErrors::MissingKing(team)),
                1 => {}
                _ => return Err(ChessErrors::DuplicateKing(team)),
            }
        }
        Ok(game)
    }

    /// Custom position without the one-king-per-side rule, for analysis and
    /// move-generation checks. Double occupancy is still rejected.
    pub fn from_layout_no_rule_checking(
        config: &GameConfig,
        layout: &[LayoutEntry],
    ) -> Result<Self, ChessErrors> {
        let mut game = Self::empty(config);
        for (class, team, location) in layout {
            if game.board.occupant(*location).is_some() {
                return Err(ChessErrors::SquareAlreadyOccupied(*location));
            }
            game.place_piece(*class, *team, *location);
        }
        game.validate()?;
        info!(pieces = game.pieces.len(), "custom layout set up");
        Ok(game)
    }

    /// Hands the move to `team`. Setup only.
    pub fn with_active_team(mut self, team: PieceTeam) -> Self {
        self.active = team;
        self
    }

    fn place_in_bounds(&mut self, class: PieceClass, team: PieceTeam, column: i8, row: i8) {
        if let Ok(location) = BoardLocation::from_column_row(column, row) {
            self.place_piece(class, team, location);
        }
    }

    fn place_piece(&mut self, class: PieceClass, team: PieceTeam, location: BoardLocation) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(PieceRecord::new(id, class, team, location));
        self.board.set_occupant(location, id);
        id
    }

    /// Checks that the board and the piece arena agree in both directions.
    pub fn validate(&self) -> Result<(), ChessErrors> {
        for piece in self.live_pieces() {
            if self.board.occupant(piece.location) != Some(piece.id) {
                return Err(ChessErrors::OccupancyMismatch(piece.location));
            }
        }
        for square in self.board.occupied_squares() {
            let consistent = square
                .occupant
                .and_then(|id| self.piece(id))
                .is_some_and(|p| !p.captured && p.location == square.location);
            if !consistent {
                return Err(ChessErrors::OccupancyMismatch(square.location));
            }
        }
        Ok(())
    }

    // --- Queries ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lookup(&self, column: i8, row: i8) -> Option<Square> {
        self.board.lookup(column, row)
    }

    pub fn piece_at(&self, location: BoardLocation) -> Option<PieceId> {
        self.board.occupant(location)
    }

    pub fn piece(&self, id: PieceId) -> Option<&PieceRecord> {
        self.pieces.get(id.0)
    }

    /// Like `piece`, for callers holding an id from outside this game.
    pub fn piece_checked(&self, id: PieceId) -> Result<&PieceRecord, ChessErrors> {
        self.piece(id).ok_or(ChessErrors::UnknownPiece(id.0))
    }

    /// Record of the piece on `location`, if any.
    pub fn piece_record_at(&self, location: BoardLocation) -> Option<&PieceRecord> {
        self.piece_at(location).and_then(|id| self.piece(id))
    }

    pub fn live_pieces(&self) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.pieces.iter().filter(|p| !p.captured)
    }

    pub fn active_team(&self) -> PieceTeam {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn player(&self, team: PieceTeam) -> &Player {
        &self.players[team.index()]
    }

    pub fn lost_pieces(&self, team: PieceTeam) -> &[PieceId] {
        &self.players[team.index()].pieces_lost
    }

    pub fn is_en_passant_open(&self) -> bool {
        self.en_passant_open
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    // --- Adapter operations ---

    /// Move set of `piece`, ignoring king safety. Empty for unknown or
    /// captured pieces.
    pub fn generate_moves(&self, piece: PieceId) -> Vec<BoardLocation> {
        generate_moves(self, piece)
    }

    /// Picks up the active player's piece on `location` and caches its move
    /// set. Anything else leaves nothing selected.
    pub fn select_piece(&mut self, location: BoardLocation) -> Option<&Selection> {
        self.selection = None;
        let piece = self
            .piece_record_at(location)
            .filter(|p| p.team == self.active)
            .map(|p| p.id)?;
        let moves = self.generate_moves(piece);
        self.selection = Some(Selection { piece, moves });
        self.selection.as_ref()
    }

    /// Puts the held piece back without playing it.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Resolves a turn for `piece` onto `destination`. See
    /// `apply_move_to_game` for the rules.
    pub fn attempt_move(&mut self, piece: PieceId, destination: BoardLocation) -> MoveOutcome {
        apply_move_to_game(self, piece, destination)
    }

    // --- Mutation primitives, only called by the resolver ---

    /// Moves `piece` to an empty `destination`, keeping both views in step.
    pub(crate) fn relocate_piece(&mut self, piece: PieceId, destination: BoardLocation) {
        let from = self.pieces[piece.0].location;
        self.board.clear_occupant(from);
        self.board.set_occupant(destination, piece);
        self.pieces[piece.0].location = destination;
    }

    /// Takes `piece` off the board and books it as lost by its owner.
    pub(crate) fn capture_piece(&mut self, piece: PieceId) {
        let record = &mut self.pieces[piece.0];
        if self.board.occupant(record.location) == Some(piece) {
            self.board.clear_occupant(record.location);
        }
        record.captured = true;
        record.en_passant_eligible = false;
        self.players[record.team.index()].pieces_lost.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(text: &str) -> BoardLocation {
        BoardLocation::from_algebraic(text).unwrap()
    }

    #[test]
    fn new_game_places_thirty_two_consistent_pieces() {
        let game = GameState::new_game(&GameConfig::default());
        assert_eq!(game.live_pieces().count(), 32);
        assert!(game.validate().is_ok());
        assert_eq!(game.active_team(), PieceTeam::Light);
        assert!(!game.is_en_passant_open());

        let king = game.piece_record_at(loc("d1")).unwrap();
        assert_eq!(king.class, PieceClass::King);
        let queen = game.piece_record_at(loc("e8")).unwrap();
        assert_eq!((queen.class, queen.team), (PieceClass::Queen, PieceTeam::Dark));
        for column in 1..=8 {
            let pawn = game.lookup(column, 7).and_then(|s| s.occupant).unwrap();
            assert!(game.piece(pawn).unwrap().is_pawn());
        }
        assert!(game.lookup(4, 4).unwrap().is_empty());
    }

    #[test]
    fn player_names_come_from_config() {
        let config = GameConfig {
            light_name: "Ada".to_string(),
            dark_name: "Brook".to_string(),
        };
        let game = GameState::new_game(&config);
        assert_eq!(game.active_player().name, "Ada");
        assert_eq!(game.player(PieceTeam::Dark).name, "Brook");
    }

    #[test]
    fn layout_rejects_double_occupancy() {
        let result = GameState::from_layout_no_rule_checking(
            &GameConfig::default(),
            &[
                (PieceClass::Rook, PieceTeam::Light, loc("a1")),
                (PieceClass::Knight, PieceTeam::Dark, loc("a1")),
            ],
        );
        assert_eq!(result.unwrap_err(), ChessErrors::SquareAlreadyOccupied(loc("a1")));
    }

    #[test]
    fn checked_layout_requires_one_king_each() {
        let config = GameConfig::default();
        let missing = GameState::from_layout(
            &config,
            &[(PieceClass::King, PieceTeam::Light, loc("e1"))],
        );
        assert_eq!(missing.unwrap_err(), ChessErrors::MissingKing(PieceTeam::Dark));

        let doubled = GameState::from_layout(
            &config,
            &[
                (PieceClass::King, PieceTeam::Light, loc("e1")),
                (PieceClass::King, PieceTeam::Light, loc("d1")),
                (PieceClass::King, PieceTeam::Dark, loc("e8")),
            ],
        );
        assert_eq!(doubled.unwrap_err(), ChessErrors::DuplicateKing(PieceTeam::Light));

        assert!(GameState::from_layout(
            &config,
            &[
                (PieceClass::King, PieceTeam::Light, loc("e1")),
                (PieceClass::King, PieceTeam::Dark, loc("e8")),
            ],
        )
        .is_ok());
    }

    #[test]
    fn selection_only_picks_up_active_pieces() {
        let mut game = GameState::new_game(&GameConfig::default());
        assert!(game.select_piece(loc("e7")).is_none());
        assert!(game.select_piece(loc("e4")).is_none());

        let selection = game.select_piece(loc("b1")).unwrap();
        assert_eq!(selection.moves.len(), 2);
        game.deselect();
        assert!(game.selection().is_none());
    }

    #[test]
    fn checked_piece_lookup_rejects_foreign_ids() {
        let game = GameState::new_game(&GameConfig::default());
        let knight = game.piece_at(loc("g1")).unwrap();
        assert_eq!(game.piece_checked(knight).unwrap().class, PieceClass::Knight);
        assert_eq!(game.piece_checked(PieceId(32)).unwrap_err(), ChessErrors::UnknownPiece(32));
    }

    #[test]
    fn validate_detects_a_diverged_back_reference() {
        let mut game = GameState::new_game(&GameConfig::default());
        game.pieces[0].location = loc("d4");
        assert!(matches!(game.validate(), Err(ChessErrors::OccupancyMismatch(_))));
    }
}
