use anyhow::{Context, Result};
use clap::Parser;
use cozy_chess::{Color, File, Piece, Rank, Square};
use pawnstorm::{Position, SearchParams, SessionError, SessionManager};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the double-advance chess variant against the engine", long_about = None)]
struct Args {
    /// Search depth in plies (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// JSON file with search parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for shuffling move order before the capture-first sort
    #[arg(long)]
    seed: Option<u64>,

    /// Print each move outcome as JSON
    #[arg(long)]
    json: bool,
}

fn load_params(args: &Args) -> Result<SearchParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth { params.depth = d; }
    if args.seed.is_some() { params.shuffle_seed = args.seed; }
    Ok(params)
}

fn piece_char(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White { c.to_ascii_uppercase() } else { c }
}

fn print_board(fen: &str) -> Result<()> {
    let pos = Position::from_fen(fen)?;
    println!();
    for rank in Rank::ALL.iter().rev() {
        print!("{} ", *rank as usize + 1);
        for file in File::ALL {
            let ch = pos.piece_at(Square::new(file, *rank)).map(|(p, c)| piece_char(p, c)).unwrap_or('.');
            print!(" {}", ch);
        }
        println!();
    }
    println!("\n   a b c d e f g h");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;

    let mut manager = SessionManager::new(params);
    match &args.fen {
        Some(fen) => manager.start_from_fen(fen)?,
        None => manager.start_new_game(),
    }

    println!("Pawns may advance two ranks from any rank, once each. Commands: new, resign, quit.");
    print_board(&manager.get_board_state()?)?;

    let stdin = io::stdin();
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else { break };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "new" => {
                manager.start_new_game();
                print_board(&manager.get_board_state()?)?;
                continue;
            }
            "resign" => {
                println!("Result: {}", manager.resign()?);
                manager.start_new_game();
                print_board(&manager.get_board_state()?)?;
                continue;
            }
            _ => {}
        }

        match manager.make_user_move(line.trim()) {
            Ok(outcome) => {
                if args.json {
                    println!("{}", serde_json::to_string(&outcome)?);
                } else if let Some(ai) = &outcome.ai_move {
                    println!("Engine plays: {}", ai);
                }
                print_board(&outcome.fen)?;
                if outcome.is_game_over {
                    println!("Game over. Result: {}", outcome.result);
                    manager.start_new_game();
                    print_board(&manager.get_board_state()?)?;
                }
            }
            Err(SessionError::InvalidMove(e)) => println!("Invalid move: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
