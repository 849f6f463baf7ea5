pub mod alphabeta;
pub mod eval;
pub mod tt;
pub mod zobrist;
