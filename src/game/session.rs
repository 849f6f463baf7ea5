use cozy_chess::{Color, Move};
use crate::board::{Outcome, Position};
use crate::error::{MoveError, PositionError};

/// One live game: the position and the moves played so far, in UCI.
#[derive(Clone, Debug, Default)]
pub struct Session {
    position: Position,
    history: Vec<String>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self { position: Position::from_fen(fen)?, history: Vec::new() })
    }

    pub fn position(&self) -> &Position { &self.position }
    pub fn position_mut(&mut self) -> &mut Position { &mut self.position }

    /// Validates a UCI move against the variant rules and plays it. Nothing
    /// changes when the text is malformed or the move is illegal.
    pub fn apply_user_move(&mut self, uci: &str) -> Result<(), MoveError> {
        let mv = self.position.parse_uci(uci)?;
        let text = self.position.to_uci(mv);
        self.position.push(mv)?;
        self.history.push(text);
        Ok(())
    }

    /// Plays a move produced by the searcher and returns its UCI text.
    pub fn apply_ai_move(&mut self, mv: Move) -> Result<String, MoveError> {
        let text = self.position.to_uci(mv);
        self.position.push(mv)?;
        self.history.push(text.clone());
        Ok(text)
    }

    pub fn get_board_fen(&self) -> String { self.position.fen() }

    pub fn is_game_over(&self) -> bool { self.position.is_game_over() }

    /// PGN-style result; `*` while the game is running.
    pub fn get_result(&self) -> &'static str {
        match self.position.outcome() {
            None => "*",
            Some(Outcome::Draw) => "1/2-1/2",
            Some(Outcome::Decisive { winner: Color::White }) => "1-0",
            Some(Outcome::Decisive { winner: Color::Black }) => "0-1",
        }
    }

    pub fn last_move(&self) -> Option<&str> { self.history.last().map(String::as_str) }

    pub fn history(&self) -> &[String] { &self.history }
}
