//! Interactive terminal chess match.
//!
//! Reads moves as square pairs ("e2e4" or "e2 e4"), validates them
//! through the rules engine, and renders the board after every accepted
//! move. The match runs until checkmate or until a player quits.

mod config;

use anyhow::Context;
use chess_core::Movement;
use chess_rules::{render, Board, Game, Validation};
use clap::Parser;
use config::Config;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Play a chess match in the terminal.
#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play a chess match in the terminal")]
struct Args {
    /// Starting position as a FEN string (overrides the config file)
    #[arg(long)]
    fen: Option<String>,

    /// Render the board with FEN letters instead of unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Path to a config file (chess.toml is picked up automatically)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn draw(board: &Board, ascii: bool) -> String {
    if ascii {
        render::ascii(board)
    } else {
        render::unicode(board)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut game = match args.fen.or(config.fen) {
        Some(fen) => Game::from_fen(&fen).context("invalid starting FEN")?,
        None => Game::new(),
    };
    let ascii = args.ascii || config.ascii;

    tracing::info!("Match started: {}", game.to_fen());
    println!("Enter moves as square pairs (e.g. e2e4); 'fen' prints the position, 'quit' exits.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", draw(game.board(), ascii));

        if let Some(winner) = game.winner() {
            println!("Checkmate - {} wins", winner);
            break;
        }

        print!("{} to move> ", game.turn());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input: String = line?.split_whitespace().collect();

        match input.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "fen" => {
                println!("{}", game.to_fen());
                continue;
            }
            _ => {}
        }

        let movement = match Movement::from_text(&input) {
            Ok(movement) => movement,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match game.make_move(movement) {
            Validation::LegalMove | Validation::Checkmate => {
                tracing::debug!("Accepted {}", movement);
            }
            outcome => {
                tracing::debug!("Rejected {}: {}", movement, outcome);
                println!("Rejected: {}", outcome);
            }
        }
    }

    tracing::info!("Final position: {}", game.to_fen());
    Ok(())
}
