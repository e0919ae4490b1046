use std::path::PathBuf;

use chess_rules::{Move, Square};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chess", version, about = "Check and play chess moves from the terminal")]
pub struct Cli {
    /// YAML config file; falls back to $CHESS_CONFIG_PATH.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive game: type squares to select and move, or reset/board/quit.
    Play,
    /// Report whether from->to is legal after replaying --moves.
    Check {
        from: Square,
        to: Square,
        #[arg(long, num_args = 0..)]
        moves: Vec<Move>,
    },
    /// Play moves such as e2e4 from the starting position and print the result.
    Replay { moves: Vec<Move> },
}
