//! chess-cli - Inspects positions with the 0x88 move generator.
//!
//! Every subcommand starts from `--fen` when given and from the standard
//! starting position otherwise.

use anyhow::Context;
use chess_movegen::movegen::perft::{perft, perft_divide};
use chess_movegen::{attack_set, find_move, generate_moves, legal_moves, make_move, Position};
use clap::{Parser, Subcommand};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Position, move generation and perft tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the board and print its FEN
    Show {
        /// Position to start from
        #[arg(long)]
        fen: Option<String>,
    },
    /// List generated moves in UCI notation
    Moves {
        /// Position to start from
        #[arg(long)]
        fen: Option<String>,
        /// Drop moves that leave the mover's king attacked
        #[arg(long)]
        legal: bool,
    },
    /// List squares attacked by the side not to move
    Attacks {
        /// Position to start from
        #[arg(long)]
        fen: Option<String>,
    },
    /// Apply UCI moves in order, printing the FEN after each one
    Apply {
        /// Position to start from
        #[arg(long)]
        fen: Option<String>,
        /// Moves such as e2e4 or a7a8q
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Search depth in plies
        #[arg(short, long, default_value = "3")]
        depth: u32,
        /// Position to start from
        #[arg(long)]
        fen: Option<String>,
        /// Print the node count below each root move
        #[arg(long)]
        divide: bool,
    },
}

fn load(fen: Option<&str>) -> anyhow::Result<Position> {
    Position::from_fen_or_startpos(fen)
        .with_context(|| format!("Failed to decode FEN '{}'", fen.unwrap_or_default()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { fen } => {
            let position = load(fen.as_deref())?;
            print!("{}", position);
            println!("{}", position.to_fen());
        }
        Commands::Moves { fen, legal } => {
            let position = load(fen.as_deref())?;
            let moves = if legal {
                legal_moves(&position)
            } else {
                generate_moves(&position)
            };
            let uci: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
            println!("{}", uci.join(" "));
            println!("{} moves", moves.len());
        }
        Commands::Attacks { fen } => {
            let position = load(fen.as_deref())?;
            let attacked = attack_set(&position);
            let squares: Vec<String> = attacked.iter().map(|sq| sq.to_algebraic()).collect();
            println!("{}", squares.join(" "));
            println!(
                "{} squares attacked by {}",
                attacked.len(),
                position.side_to_move.opposite()
            );
        }
        Commands::Apply { fen, moves } => {
            let mut position = load(fen.as_deref())?;
            for text in &moves {
                let m = find_move(&position, text)
                    .with_context(|| format!("Cannot play '{}' in {}", text, position.to_fen()))?;
                position = make_move(&position, m);
                tracing::info!("Played {}", m);
                println!("{}", position.to_fen());
            }
            print!("{}", position);
        }
        Commands::Perft { depth, fen, divide } => {
            let position = load(fen.as_deref())?;
            let start = Instant::now();
            let nodes = if divide {
                let results = perft_divide(&position, depth);
                for (uci, count) in &results {
                    println!("{}: {}", uci, count);
                }
                results.iter().map(|(_, count)| count).sum()
            } else {
                perft(&position, depth)
            };
            let elapsed = start.elapsed();
            tracing::info!("perft({}) finished in {:?}", depth, elapsed);
            println!("Nodes: {}", nodes);
        }
    }

    Ok(())
}
