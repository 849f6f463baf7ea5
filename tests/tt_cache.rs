use pawnstorm::search::alphabeta::{SearchParams, Searcher};
use pawnstorm::search::tt::{CachePolicy, Entry, Tt};
use pawnstorm::search::zobrist;
use pawnstorm::Position;

fn entry(key: u64, depth: u32, score: f64) -> Entry {
    Entry { key, depth, score, best: None }
}

#[test]
fn put_overwrites_unconditionally() {
    let mut tt = Tt::new();
    tt.put(entry(1, 5, 10.0));
    tt.put(entry(1, 2, 20.0));
    let e = tt.get(1).expect("entry present");
    assert_eq!(e.score, 20.0);
    assert_eq!(e.depth, 2);
    assert_eq!(tt.len(), 1);
}

#[test]
fn cleared_wholesale_only_past_capacity() {
    let mut tt = Tt::new();
    tt.set_capacity_entries(8);
    for i in 0..8u64 { tt.put(entry(i, 2, 0.0)); }
    assert!(!tt.clear_if_full());
    assert_eq!(tt.len(), 8);
    tt.put(entry(8, 2, 0.0));
    // No piecemeal eviction: the cache grows past capacity until the next clear check.
    assert_eq!(tt.len(), 9);
    assert!(tt.clear_if_full());
    assert!(tt.is_empty());
}

#[test]
fn probe_respects_policy() {
    let mut tt = Tt::new();
    tt.put(entry(7, 2, 1.0));
    assert!(tt.probe(7, 5).is_some());
    tt.set_policy(CachePolicy::DepthChecked);
    assert!(tt.probe(7, 5).is_none());
    assert!(tt.probe(7, 2).is_some());
}

#[test]
fn fingerprint_tracks_spent_double_advances() {
    // Same placement reached with and without the e-pawn's jump spent.
    let mut jumped = Position::startpos();
    for m in ["e2e4", "g8f6", "e4e2", "f6g8"] { jumped.make_move_uci(m).unwrap(); }
    let mut fresh = Position::startpos();
    for m in ["g1f3", "g8f6", "f3g1", "f6g8"] { fresh.make_move_uci(m).unwrap(); }
    let placement = |p: &Position| p.fen().split_whitespace().next().unwrap().to_string();
    assert_eq!(placement(&jumped), placement(&fresh));
    assert_ne!(zobrist::compute(&jumped), zobrist::compute(&fresh));
    assert_eq!(zobrist::compute(&fresh), zobrist::compute(&Position::startpos()));
}

#[test]
fn repeated_search_is_answered_from_cache() {
    let mut pos = Position::startpos();
    let mut s = Searcher::new(SearchParams { depth: 3, ..SearchParams::default() });
    let first = s.search_depth(&mut pos, 3);
    assert!(s.tt().len() > 1);
    let second = s.search_depth(&mut pos, 3);
    assert_eq!(second.nodes, 1);
    assert_eq!(second.cache_hits, 1);
    assert_eq!(second.score, first.score);
    assert_eq!(second.bestmove, first.bestmove);
}

#[test]
fn oversized_cache_is_cleared_before_search() {
    let mut pos = Position::startpos();
    let mut s = Searcher::new(SearchParams { depth: 3, cache_capacity: 1, ..SearchParams::default() });
    let first = s.search_depth(&mut pos, 3);
    assert!(s.tt().len() > 1);
    let second = s.search_depth(&mut pos, 3);
    assert_eq!(second.cache_hits, 0);
    assert_eq!(second.nodes, first.nodes);
}

#[test]
fn depth_agnostic_cache_reuses_shallow_result() {
    // Known limitation: a depth-2 entry answers a depth-3 query.
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut pos = Position::from_fen(fen).unwrap();
    let mut s = Searcher::new(SearchParams { depth: 3, ..SearchParams::default() });
    let shallow = s.search_depth(&mut pos, 2);
    let deep = s.search_depth(&mut pos, 3);
    assert_eq!(deep.nodes, 1);
    assert_eq!(deep.score, shallow.score);
}

#[test]
fn depth_checked_cache_searches_again() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut pos = Position::from_fen(fen).unwrap();
    let params = SearchParams { depth: 3, cache_policy: CachePolicy::DepthChecked, ..SearchParams::default() };
    let mut s = Searcher::new(params);
    let _ = s.search_depth(&mut pos, 2);
    let deep = s.search_depth(&mut pos, 3);
    assert!(deep.nodes > 1);

    let mut fresh = Searcher::new(params);
    let reference = fresh.search_depth(&mut pos, 3);
    assert_eq!(deep.score, reference.score);
    assert_eq!(deep.bestmove, reference.bestmove);
}
