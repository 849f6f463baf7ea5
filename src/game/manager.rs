use cozy_chess::Color;
use log::info;
use serde::Serialize;
use crate::error::{PositionError, SessionError};
use crate::game::session::Session;
use crate::search::alphabeta::{SearchParams, Searcher};

/// What the caller sees after submitting a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Absent when the submitted move already ended the game.
    pub ai_move: Option<String>,
    pub fen: String,
    pub is_game_over: bool,
    pub result: String,
}

struct ActiveGame {
    session: Session,
    searcher: Searcher,
}

/// Runs one game at a time, pairing the session with a fresh searcher.
pub struct SessionManager {
    params: SearchParams,
    game: Option<ActiveGame>,
}

impl Default for SessionManager {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl SessionManager {
    pub fn new(params: SearchParams) -> Self { Self { params, game: None } }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn is_started(&self) -> bool { self.game.is_some() }

    pub fn session(&self) -> Option<&Session> { self.game.as_ref().map(|g| &g.session) }

    pub fn start_new_game(&mut self) {
        self.install(Session::new());
    }

    pub fn start_from_fen(&mut self, fen: &str) -> Result<(), PositionError> {
        self.install(Session::from_fen(fen)?);
        Ok(())
    }

    fn install(&mut self, session: Session) {
        info!("new game at depth {} from {}", self.params.depth, session.get_board_fen());
        self.game = Some(ActiveGame { session, searcher: Searcher::new(self.params) });
    }

    /// Plays the user's move, then the engine's reply unless the game ended.
    pub fn make_user_move(&mut self, uci: &str) -> Result<MoveOutcome, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NotStarted)?;
        game.session.apply_user_move(uci)?;

        let mut ai_move = None;
        if !game.session.is_game_over() {
            if let Some(mv) = game.searcher.get_best_move(game.session.position_mut()) {
                ai_move = Some(game.session.apply_ai_move(mv)?);
            }
        }

        let outcome = MoveOutcome {
            ai_move,
            fen: game.session.get_board_fen(),
            is_game_over: game.session.is_game_over(),
            result: game.session.get_result().to_string(),
        };
        if outcome.is_game_over { info!("game over: {}", outcome.result); }
        Ok(outcome)
    }

    pub fn get_board_state(&self) -> Result<String, SessionError> {
        self.session().map(Session::get_board_fen).ok_or(SessionError::NotStarted)
    }

    pub fn get_last_move(&self) -> Option<String> {
        self.session().and_then(Session::last_move).map(str::to_string)
    }

    /// The side to move resigns; returns the result and ends the session.
    pub fn resign(&mut self) -> Result<String, SessionError> {
        let game = self.game.take().ok_or(SessionError::NotStarted)?;
        let result = if game.session.position().side_to_move() == Color::White { "0-1" } else { "1-0" };
        info!("resignation: {}", result);
        Ok(result.to_string())
    }
}
