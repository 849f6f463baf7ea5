use clap::Parser;
use pawnstorm::perft::perft;
use pawnstorm::Position;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Variant move-tree counter")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Print per-move subtree counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { Position::startpos() } else { Position::from_fen(&args.fen)? };

    let t0 = Instant::now();
    let nodes = if args.divide && args.depth > 0 {
        let mut total = 0u64;
        for mv in pos.legal_moves() {
            let uci = pos.to_uci(mv);
            pos.push(mv)?;
            let n = perft(&mut pos, args.depth - 1);
            pos.pop();
            println!("{}: {}", uci, n);
            total += n;
        }
        total
    } else {
        perft(&mut pos, args.depth)
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
