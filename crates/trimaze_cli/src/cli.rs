//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use trimaze_core::{Hand, OutputFormat};

/// trimaze - Triangular maze validator and wall follower
#[derive(Parser)]
#[command(name = "trimaze")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a file holds a consistent maze
    #[command(visible_alias = "test")]
    Validate {
        /// Maze file, or `-` for standard input
        file: PathBuf,
    },

    /// Print the cells visited by a wall follower
    Trace {
        #[command(flatten)]
        start: StartArgs,

        /// Hand kept on the wall (left, right)
        #[arg(long)]
        hand: Option<Hand>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Trace keeping the right hand on the wall
    Rpath {
        #[command(flatten)]
        start: StartArgs,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Trace keeping the left hand on the wall
    Lpath {
        #[command(flatten)]
        start: StartArgs,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
pub struct StartArgs {
    /// Starting row (1-based)
    pub row: usize,

    /// Starting column (1-based)
    pub col: usize,

    /// Maze file, or `-` for standard input
    pub file: PathBuf,
}

#[derive(Args)]
pub struct LimitArgs {
    /// Abort after this many cells
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_steps: Option<u64>,

    /// Abort when the walk provably never leaves the maze
    #[arg(long)]
    pub detect_cycles: bool,
}
