use clap::Parser;
use pawnstorm::search::alphabeta::{SearchParams, Searcher};
use pawnstorm::Position;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pawnstorm-bench", version, about = "Time a fixed-depth search")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Transposition cache capacity in entries
    #[arg(long, default_value_t = 1_000_000)]
    cache_entries: usize,

    /// Disable capture-first ordering
    #[arg(long, default_value_t = false)]
    no_ordering: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { Position::startpos() } else { Position::from_fen(&args.fen)? };

    let params = SearchParams {
        depth: args.depth,
        cache_capacity: args.cache_entries,
        order_captures: !args.no_ordering,
        ..SearchParams::default()
    };
    let mut s = Searcher::new(params);

    let t0 = Instant::now();
    let res = s.search_depth(&mut pos, args.depth);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!(
        "bestmove={} score={:.1} nodes={} cache_hits={} elapsed={:.3}s nps={:.1}",
        res.bestmove.unwrap_or_else(|| "(none)".to_string()), res.score, res.nodes, res.cache_hits, dt.as_secs_f64(), nps
    );
    Ok(())
}
