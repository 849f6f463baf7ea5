//! Static evaluation.
//!
//! `evaluate` is mover-relative: positive means the side to move stands
//! better. Terms are first summed from White's point of view and the total is
//! negated when Black is to move.

use cozy_chess::{Color, File, Piece, Rank, Square};
use crate::board::Position;

pub type Score = f64;

pub const MATE_SCORE: Score = f64::INFINITY;
pub const DRAW_SCORE: Score = 0.0;

const PST_WEIGHT: Score = 0.1;
const MOBILITY_WEIGHT: Score = 10.0;
const CENTER_BONUS: Score = 30.0;
const RING_BONUS: Score = 15.0;
const DOUBLED_PAWN_PENALTY: Score = 20.0;
const KING_SHIELD_BONUS: Score = 30.0;

const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];
const RING: [Square; 12] = [
    Square::C3, Square::D3, Square::E3, Square::F3,
    Square::C4, Square::F4, Square::C5, Square::F5,
    Square::C6, Square::D6, Square::E6, Square::F6,
];

// White's view, a1 first; Black reads the rank-mirrored square.
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => 100.0,
        Piece::Knight => 320.0,
        Piece::Bishop => 330.0,
        Piece::Rook => 500.0,
        Piece::Queen => 900.0,
        Piece::King => 20000.0,
    }
}

fn sign(color: Color) -> Score {
    if color == Color::White { 1.0 } else { -1.0 }
}

fn pst_bonus(piece: Piece, color: Color, sq: Square) -> Score {
    let idx = if color == Color::White { sq as usize } else { sq as usize ^ 56 };
    let raw = match piece {
        Piece::Pawn => PAWN_PST[idx],
        Piece::Knight => KNIGHT_PST[idx],
        _ => 0,
    };
    raw as Score * PST_WEIGHT
}

fn doubled_pawns(position: &Position, color: Color) -> Score {
    let board = position.board();
    let pawns = board.colors(color) & board.pieces(Piece::Pawn);
    let mut extra = 0u32;
    for file in File::ALL {
        let n = (pawns & file.bitboard()).len();
        if n > 1 { extra += n - 1; }
    }
    extra as Score * DOUBLED_PAWN_PENALTY
}

fn king_shield(position: &Position, color: Color) -> Score {
    let king = position.king(color);
    let forward = if color == Color::White { king.rank() as i32 + 1 } else { king.rank() as i32 - 1 };
    if !(0..8).contains(&forward) { return 0.0; }
    let file = king.file() as i32;
    let mut bonus = 0.0;
    for f in (file - 1)..=(file + 1) {
        if !(0..8).contains(&f) { continue; }
        let sq = Square::new(File::index(f as usize), Rank::index(forward as usize));
        if position.piece_at(sq) == Some((Piece::Pawn, color)) { bonus += KING_SHIELD_BONUS; }
    }
    bonus
}

/// Score from White's point of view. A mated side scores minus infinity for itself.
pub fn evaluate_white(position: &Position) -> Score {
    let moves = position.legal_moves();
    let white_to_move = position.side_to_move() == Color::White;
    if moves.is_empty() {
        if position.is_check() { return if white_to_move { -MATE_SCORE } else { MATE_SCORE }; }
        return DRAW_SCORE;
    }
    if position.is_insufficient_material() { return DRAW_SCORE; }

    let mut score = 0.0;
    for sq in Square::ALL {
        let Some((piece, color)) = position.piece_at(sq) else { continue };
        let s = sign(color);
        score += s * (piece_value(piece) + pst_bonus(piece, color, sq));
        if CENTER.contains(&sq) {
            score += s * CENTER_BONUS;
        } else if RING.contains(&sq) {
            score += s * RING_BONUS;
        }
    }

    let mobility = moves.len() as Score * MOBILITY_WEIGHT;
    score += if white_to_move { mobility } else { -mobility };

    score -= doubled_pawns(position, Color::White);
    score += doubled_pawns(position, Color::Black);

    score += king_shield(position, Color::White);
    score -= king_shield(position, Color::Black);

    score
}

/// Score from the side to move's point of view.
pub fn evaluate(position: &Position) -> Score {
    let white = evaluate_white(position);
    if position.side_to_move() == Color::White { white } else { -white }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_pawns_counted_per_extra_pawn() {
        let p = Position::from_fen("4k3/8/8/8/4P3/4P3/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(doubled_pawns(&p, Color::White), 40.0);
        assert_eq!(doubled_pawns(&p, Color::Black), 0.0);
    }

    #[test]
    fn king_shield_counts_own_pawns_in_front() {
        let p = Position::from_fen("4k3/3ppp2/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(king_shield(&p, Color::White), 30.0);
        assert_eq!(king_shield(&p, Color::Black), 90.0);
        let edge = Position::from_fen("4k3/8/8/8/8/8/PP6/K7 w - - 0 1").unwrap();
        assert_eq!(king_shield(&edge, Color::White), 60.0);
    }

    #[test]
    fn black_tables_mirror_white() {
        assert_eq!(pst_bonus(Piece::Pawn, Color::White, Square::E4), pst_bonus(Piece::Pawn, Color::Black, Square::E5));
        assert_eq!(pst_bonus(Piece::Knight, Color::White, Square::B1), pst_bonus(Piece::Knight, Color::Black, Square::B8));
        assert_eq!(pst_bonus(Piece::Rook, Color::White, Square::A1), 0.0);
    }
}
