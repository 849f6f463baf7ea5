//! Once-per-pawn double advance.
//!
//! Any pawn may advance (or retreat) exactly two ranks along its file once per
//! game, from any rank. The privilege is recorded against the origin square:
//! once a square has launched a two-rank pawn move, no later two-rank pawn move
//! may start there. Every other move follows the standard rules.

use cozy_chess::{
    get_bishop_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard, Board,
    BoardBuilder, Color, Move, Piece, Rank, Square,
};

/// True when `mv` spans exactly two ranks.
pub fn spans_two_ranks(mv: Move) -> bool {
    (mv.from.rank() as i32 - mv.to.rank() as i32).abs() == 2
}

/// Board after `mv`, or `None` when the variant rules forbid it.
///
/// `used` holds the origin squares that already launched a double advance.
pub fn successor(board: &Board, used: BitBoard, mv: Move) -> Option<Board> {
    if board.piece_on(mv.from) == Some(Piece::Pawn) && spans_two_ranks(mv) {
        if used.has(mv.from) { return None; }
        if board.is_legal(mv) {
            let mut next = board.clone();
            next.play_unchecked(mv);
            return Some(next);
        }
        return double_advance(board, mv);
    }
    if !board.is_legal(mv) { return None; }
    let mut next = board.clone();
    next.play_unchecked(mv);
    Some(next)
}

/// Whether `mv` is playable under the variant rules.
pub fn is_legal_variant_move(board: &Board, used: BitBoard, mv: Move) -> bool {
    successor(board, used, mv).is_some()
}

/// Two-rank pawn moves the standard generator does not produce.
pub fn extra_double_advances(board: &Board, used: BitBoard) -> Vec<Move> {
    let stm = board.side_to_move();
    let mut out = Vec::new();
    for from in board.colors(stm) & board.pieces(Piece::Pawn) {
        if used.has(from) { continue; }
        let rank = from.rank() as i32;
        for target in [rank + 2, rank - 2] {
            if !(0..8).contains(&target) { continue; }
            let mv = Move { from, to: Square::new(from.file(), Rank::index(target as usize)), promotion: None };
            if board.is_legal(mv) { continue; }
            if double_advance(board, mv).is_some() { out.push(mv); }
        }
    }
    out
}

// Non-standard double advance built square by square; the rules library would reject it.
fn double_advance(board: &Board, mv: Move) -> Option<Board> {
    let mover = board.side_to_move();
    if board.color_on(mv.from) != Some(mover) || mv.promotion.is_some() { return None; }
    if mv.from.file() != mv.to.file() { return None; }
    if matches!(mv.to.rank(), Rank::First | Rank::Eighth) { return None; }
    let mid_rank = (mv.from.rank() as usize + mv.to.rank() as usize) / 2;
    let mid = Square::new(mv.from.file(), Rank::index(mid_rank));
    let occupied = board.occupied();
    if occupied.has(mid) || occupied.has(mv.to) { return None; }

    let after = (occupied ^ mv.from.bitboard()) | mv.to.bitboard();
    if king_attacked(board, mover, after) { return None; }

    let mut builder = BoardBuilder::from_board(board);
    *builder.square_mut(mv.from) = None;
    *builder.square_mut(mv.to) = Some((Piece::Pawn, mover));
    builder.side_to_move = !mover;
    builder.en_passant = None;
    builder.halfmove_clock = 0;
    if mover == Color::Black { builder.fullmove_number = builder.fullmove_number.saturating_add(1); }
    builder.build().ok()
}

// Attack test on the mover's king with the given occupancy. A quiet pawn move
// never removes an attacker, so only the blockers change.
fn king_attacked(board: &Board, mover: Color, occupied: BitBoard) -> bool {
    let king = board.king(mover);
    let them = board.colors(!mover);
    let queens = board.pieces(Piece::Queen);
    let rook_like = them & (board.pieces(Piece::Rook) | queens);
    let bishop_like = them & (board.pieces(Piece::Bishop) | queens);
    let knights = them & board.pieces(Piece::Knight);
    let pawns = them & board.pieces(Piece::Pawn);
    !(get_rook_moves(king, occupied) & rook_like).is_empty()
        || !(get_bishop_moves(king, occupied) & bishop_like).is_empty()
        || !(get_knight_moves(king) & knights).is_empty()
        || !(get_pawn_attacks(king, mover) & pawns).is_empty()
}
