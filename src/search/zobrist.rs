use cozy_chess::{Color, Piece};
use crate::board::Position;
use std::sync::OnceLock;

// Layout: 12*64 piece keys, 64 double-advance keys, 2*2*8 castling keys, 8 en-passant keys.
const PIECE_KEYS: usize = 12 * 64;
const USED_BASE: usize = PIECE_KEYS;
const CASTLE_BASE: usize = USED_BASE + 64;
const EP_BASE: usize = CASTLE_BASE + 32;
const TABLE_LEN: usize = EP_BASE + 8;

fn piece_index(color: Color, piece: Piece) -> usize {
    let p = match piece {
        Piece::Pawn => 0,
        Piece::Knight => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    };
    let c = if color == Color::White { 0 } else { 1 };
    c * 6 + p
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; TABLE_LEN]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn init_table() -> &'static [u64; TABLE_LEN] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; TABLE_LEN];
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_side() -> u64 {
    *SIDE_KEY.get_or_init(|| splitmix64(0xABCDEF1234567890))
}

/// Fingerprint of everything that affects move legality: placement, side to
/// move, castling rights, en-passant file and the spent double advances.
pub fn compute(position: &Position) -> u64 {
    let table = init_table();
    let board = position.board();
    let mut key = 0u64;
    for &color in &[Color::White, Color::Black] {
        for &piece in &[Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
            let bb = board.colors(color) & board.pieces(piece);
            for sq in bb {
                key ^= table[piece_index(color, piece) * 64 + sq as usize];
            }
        }
        let rights = board.castle_rights(color);
        let c = if color == Color::White { 0 } else { 16 };
        if let Some(f) = rights.short { key ^= table[CASTLE_BASE + c + f as usize]; }
        if let Some(f) = rights.long { key ^= table[CASTLE_BASE + c + 8 + f as usize]; }
    }
    for sq in position.double_moved() {
        key ^= table[USED_BASE + sq as usize];
    }
    if let Some(f) = board.en_passant() { key ^= table[EP_BASE + f as usize]; }
    if board.side_to_move() == Color::Black { key ^= init_side(); }
    key
}
