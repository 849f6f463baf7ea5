// Alpha-beta engine for chess with a once-per-pawn double advance from any rank
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod search;

pub use board::Position;
pub use error::{MoveError, PositionError, SessionError};
pub use game::{MoveOutcome, Session, SessionManager};
pub use search::alphabeta::{SearchParams, SearchResult, Searcher};
