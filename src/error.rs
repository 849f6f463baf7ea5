use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("FEN error: {0}")]
    Fen(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Text that is not a UCI move at all.
    #[error("malformed move: {0}")]
    Malformed(String),
    /// Well-formed move the position does not allow, including a pawn's second double advance.
    #[error("illegal move: {0}")]
    Illegal(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("game not started")]
    NotStarted,
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
}
