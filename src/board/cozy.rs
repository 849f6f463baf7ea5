use cozy_chess::{BitBoard, Board as CozyBoard, Color, Move, Piece, Square};
use crate::board::{notation, variant};
use crate::error::{MoveError, PositionError};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

/// Live board state: the cozy-chess board plus the set of origin squares
/// that already used their double advance.
///
/// `push` and `pop` are strictly paired; every pushed move keeps a full
/// snapshot so `pop` restores the board, the registry and the clock exactly.
///
/// cozy-chess saturates its own half-move clock at 100, so the position keeps
/// an uncapped one for the seventy-five-move rule.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    double_moved: BitBoard,
    halfmove: u32,
    undo: Vec<(CozyBoard, BitBoard, u32)>,
    seen: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(CozyBoard::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen, false).map(Self::from_board).map_err(|e| PositionError::Fen(format!("{e:?}")))
    }

    fn from_board(board: CozyBoard) -> Self {
        let halfmove = board.halfmove_clock() as u32;
        Self { board, double_moved: BitBoard::EMPTY, halfmove, undo: Vec::with_capacity(128), seen: Vec::with_capacity(128) }
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Some((self.board.piece_on(sq)?, self.board.color_on(sq)?))
    }

    pub fn king(&self, color: Color) -> Square { self.board.king(color) }

    pub fn double_moved(&self) -> BitBoard { self.double_moved }

    pub fn has_double_moved(&self, sq: Square) -> bool { self.double_moved.has(sq) }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 { self.halfmove }

    /// Number of moves pushed and not yet popped.
    pub fn ply(&self) -> usize { self.undo.len() }

    /// Variant-legal moves: standard moves minus spent double advances, plus
    /// double advances from any rank that are still available.
    pub fn legal_moves(&self) -> Vec<Move> {
        let used = self.double_moved;
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| {
            let piece = ml.piece;
            for m in ml {
                if piece == Piece::Pawn && variant::spans_two_ranks(m) && used.has(m.from) { continue; }
                moves.push(m);
            }
            false
        });
        moves.extend(variant::extra_double_advances(&self.board, used));
        moves
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        variant::is_legal_variant_move(&self.board, self.double_moved, mv)
    }

    /// Plays `mv`, refusing anything the variant rules forbid.
    pub fn push(&mut self, mv: Move) -> Result<(), MoveError> {
        let next = variant::successor(&self.board, self.double_moved, mv)
            .ok_or_else(|| MoveError::Illegal(notation::to_uci(&self.board, mv)))?;
        let pawn = self.board.piece_on(mv.from) == Some(Piece::Pawn);
        let spends = pawn && variant::spans_two_ranks(mv);
        let capture = self.board.colors(!self.board.side_to_move()).has(mv.to);
        let prev = std::mem::replace(&mut self.board, next);
        self.seen.push(prev.hash());
        self.undo.push((prev, self.double_moved, self.halfmove));
        if spends { self.double_moved |= mv.from.bitboard(); }
        self.halfmove = if pawn || capture { 0 } else { self.halfmove + 1 };
        Ok(())
    }

    /// Undoes the last `push`. Returns false when there is nothing to undo.
    pub fn pop(&mut self) -> bool {
        match self.undo.pop() {
            Some((board, used, halfmove)) => {
                self.board = board;
                self.double_moved = used;
                self.halfmove = halfmove;
                self.seen.pop();
                true
            }
            None => false,
        }
    }

    pub fn parse_uci(&self, text: &str) -> Result<Move, MoveError> {
        notation::parse_uci(&self.board, text)
    }

    pub fn to_uci(&self, mv: Move) -> String { notation::to_uci(&self.board, mv) }

    /// Parses and plays a UCI move; the position is untouched on failure.
    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<Move, MoveError> {
        let mv = self.parse_uci(mv_uci)?;
        self.push(mv)?;
        Ok(mv)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, MoveError> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn is_check(&self) -> bool { !self.board.checkers().is_empty() }

    pub fn is_checkmate(&self) -> bool { self.is_check() && self.legal_moves().is_empty() }

    pub fn is_stalemate(&self) -> bool { !self.is_check() && self.legal_moves().is_empty() }

    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// Whether `color` can never deliver mate with what it has left.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let b = &self.board;
        let ours = b.colors(color);
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !(ours & heavy).is_empty() { return false; }
        if !(ours & b.pieces(Piece::Knight)).is_empty() {
            let theirs = b.colors(!color) & !b.pieces(Piece::King) & !b.pieces(Piece::Queen);
            return ours.len() <= 2 && theirs.is_empty();
        }
        let bishops = b.pieces(Piece::Bishop);
        if !(ours & bishops).is_empty() {
            let mut light = false;
            let mut dark = false;
            for sq in bishops {
                if (sq.file() as usize + sq.rank() as usize) % 2 == 0 { dark = true; } else { light = true; }
            }
            return !(light && dark) && b.pieces(Piece::Pawn).is_empty() && b.pieces(Piece::Knight).is_empty();
        }
        true
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove >= 150 && !self.is_checkmate()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.hash();
        1 + self.seen.iter().filter(|&&h| h == key).count() >= 5
    }

    pub fn is_game_over(&self) -> bool { self.outcome().is_some() }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.legal_moves().is_empty() {
            if self.is_check() { return Some(Outcome::Decisive { winner: !self.side_to_move() }); }
            return Some(Outcome::Draw);
        }
        if self.is_insufficient_material() || self.is_seventyfive_moves() || self.is_fivefold_repetition() {
            return Some(Outcome::Draw);
        }
        None
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}
