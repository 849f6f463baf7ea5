use cozy_chess::{Board, Color, Move, Piece};
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use crate::board::Position;
use crate::search::eval::{evaluate_white, Score, MATE_SCORE};
use crate::search::tt::{CachePolicy, Entry, Tt, DEFAULT_CAPACITY};
use crate::search::zobrist;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub cache_capacity: usize,
    pub cache_policy: CachePolicy,
    pub order_captures: bool,
    /// Shuffle generated moves before ordering; varies play among equal moves.
    pub shuffle_seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 2,
            cache_capacity: DEFAULT_CAPACITY,
            cache_policy: CachePolicy::DepthAgnostic,
            order_captures: true,
            shuffle_seed: None,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub bestmove: Option<String>,
    /// From the side to move's point of view.
    pub score: Score,
    pub nodes: u64,
    pub cache_hits: u64,
}

/// Fixed-depth alpha-beta searcher. Owns its transposition cache, so one
/// searcher serves one game.
pub struct Searcher {
    tt: Tt,
    params: SearchParams,
    rng: Option<SmallRng>,
    pub(crate) nodes: u64,
    cache_hits: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

/// Captures, including en passant, by the side to move.
pub fn is_capture(board: &Board, m: Move) -> bool {
    if board.colors(!board.side_to_move()).has(m.to) { return true; }
    board.piece_on(m.from) == Some(Piece::Pawn) && m.from.file() != m.to.file() && board.piece_on(m.to).is_none()
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        let mut tt = Tt::new();
        tt.set_capacity_entries(params.cache_capacity);
        tt.set_policy(params.cache_policy);
        Self { tt, rng: params.shuffle_seed.map(SmallRng::seed_from_u64), params, nodes: 0, cache_hits: 0 }
    }

    pub fn params(&self) -> &SearchParams { &self.params }
    pub fn tt(&self) -> &Tt { &self.tt }
    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cache_hits(&self) -> u64 { self.cache_hits }

    /// Best move at the configured depth. The position must not be game-over;
    /// `None` means there was nothing to play. `position` is restored on return.
    pub fn get_best_move(&mut self, position: &mut Position) -> Option<Move> {
        self.run(position, self.params.depth).1
    }

    pub fn search_depth(&mut self, position: &mut Position, depth: u32) -> SearchResult {
        let (score, best) = self.run(position, depth);
        SearchResult { bestmove: best.map(|m| position.to_uci(m)), score, nodes: self.nodes, cache_hits: self.cache_hits }
    }

    fn run(&mut self, position: &mut Position, depth: u32) -> (Score, Option<Move>) {
        self.tt.clear_if_full();
        self.nodes = 0;
        self.cache_hits = 0;
        let (score, best) = self.search(position, depth, -MATE_SCORE, MATE_SCORE);
        debug!(
            "depth {} score {} nodes {} cache_hits {} best {}",
            depth, score, self.nodes, self.cache_hits,
            best.map(|m| position.to_uci(m)).unwrap_or_else(|| "(none)".to_string())
        );
        (score, best)
    }

    /// Alpha-beta over `depth` plies with the window given from the side to
    /// move's point of view; the score is returned the same way.
    pub fn search(&mut self, position: &mut Position, depth: u32, alpha: Score, beta: Score) -> (Score, Option<Move>) {
        if position.side_to_move() == Color::White {
            self.minimax(position, depth, alpha, beta)
        } else {
            let (score, best) = self.minimax(position, depth, -beta, -alpha);
            (-score, best)
        }
    }

    /// Variant-legal moves, captures first. The sort is stable so generation
    /// order survives within each group.
    pub fn ordered_moves(&mut self, position: &Position) -> Vec<Move> {
        let mut moves = position.legal_moves();
        if let Some(rng) = self.rng.as_mut() { moves.shuffle(rng); }
        if self.params.order_captures {
            let board = position.board();
            moves.sort_by_key(|&m| if is_capture(board, m) { 0 } else { 1 });
        }
        moves
    }

    // Scores here are White's point of view: White maximizes, Black minimizes.
    fn minimax(&mut self, position: &mut Position, depth: u32, mut alpha: Score, mut beta: Score) -> (Score, Option<Move>) {
        self.nodes += 1;
        let key = if depth > 1 { Some(zobrist::compute(position)) } else { None };
        if let Some(k) = key {
            if let Some(en) = self.tt.probe(k, depth) {
                self.cache_hits += 1;
                return (en.score, en.best);
            }
        }
        if depth == 0 || position.is_game_over() { return (evaluate_white(position), None); }

        let maximizing = position.side_to_move() == Color::White;
        let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        let mut best_move: Option<Move> = None;
        for m in self.ordered_moves(position) {
            if position.push(m).is_err() { continue; }
            let (score, _) = self.minimax(position, depth - 1, alpha, beta);
            position.pop();
            // The first move always counts so a lost node still names a move.
            if maximizing {
                if best_move.is_none() || score > best { best = score; best_move = Some(m); }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best { best = score; best_move = Some(m); }
                beta = beta.min(score);
            }
            if beta <= alpha { break; }
        }

        if let Some(k) = key {
            self.tt.put(Entry { key: k, depth, score: best, best: best_move });
        }
        (best, best_move)
    }
}
