use cozy_chess::{Board, File, Move, Piece, Square};
use crate::error::MoveError;

// cozy-chess encodes castling as king-takes-own-rook; UCI text uses the king's two-square step.

pub fn parse_uci(board: &Board, text: &str) -> Result<Move, MoveError> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) { return Err(MoveError::Malformed(text.to_string())); }
    let mut mv: Move = text.parse().map_err(|_| MoveError::Malformed(text.to_string()))?;
    let stm = board.side_to_move();
    if board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.from) == Some(stm) {
        let df = mv.to.file() as i32 - mv.from.file() as i32;
        if mv.from.rank() == mv.to.rank() && df.abs() == 2 {
            let rights = board.castle_rights(stm);
            let rook_file = if df > 0 { rights.short } else { rights.long };
            if let Some(file) = rook_file { mv.to = Square::new(file, mv.from.rank()); }
        }
    }
    Ok(mv)
}

pub fn to_uci(board: &Board, mv: Move) -> String {
    let is_castle = board.piece_on(mv.from) == Some(Piece::King)
        && board.piece_on(mv.to) == Some(Piece::Rook)
        && board.color_on(mv.to) == board.color_on(mv.from);
    if is_castle {
        let file = if (mv.to.file() as i32) > (mv.from.file() as i32) { File::G } else { File::C };
        let king_step = Move { from: mv.from, to: Square::new(file, mv.from.rank()), promotion: None };
        return format!("{}", king_step);
    }
    format!("{}", mv)
}
