use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plygen::{Board, Location, perft, successors};
use tracing::{debug, info};
use tracing_subscriber::{Registry, prelude::*};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the starting position.
    Show,
    /// Print every board the piece on (row, col) of the starting position can reach.
    Moves { row: i8, col: i8 },
    /// Print every board White can reach from the starting position.
    Successors,
    /// Count the boards reachable from the starting position, ply by ply.
    Perft { depth: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    enable_logging();

    let board = Board::start();
    match cli.command {
        Some(Commands::Show) | None => {
            println!("{}", board);
            Ok(())
        }
        Some(Commands::Moves { row, col }) => cli_moves(&board, row, col),
        Some(Commands::Successors) => cli_successors(&board),
        Some(Commands::Perft { depth }) => cli_perft(&board, depth),
    }
}

fn cli_moves(board: &Board, row: i8, col: i8) -> Result<()> {
    let location = Location::new(row, col)?;
    let piece = board
        .at_location(location)
        .with_context(|| format!("No piece at {}", location))?;
    debug!(%piece, "generating moves");

    let moves = piece
        .legal_moves(board)
        .with_context(|| format!("Couldn't generate moves for {}", piece))?;
    for mve in &moves {
        println!("{}\n", mve);
    }
    info!("{} moves", moves.len());
    Ok(())
}

fn cli_successors(board: &Board) -> Result<()> {
    let boards = successors(board).context("Couldn't generate successors")?;
    for next in &boards {
        println!("{}\n", next);
    }
    info!("{} boards", boards.len());
    Ok(())
}

fn cli_perft(board: &Board, depth: usize) -> Result<()> {
    let res = perft(board, depth).with_context(|| format!("Perft failed at depth {}", depth))?;
    println!("{}", res);
    Ok(())
}

fn enable_logging() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        );

    Registry::default().with(stderr_layer).init();
}
