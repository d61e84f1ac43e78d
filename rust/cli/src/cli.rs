//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use liarsdice_ai::probability::DECISION_TRIALS;

#[derive(Debug, Parser)]
#[command(
    name = "liarsdice",
    version,
    about = "Liar's Dice against Monte-Carlo computer players"
)]
pub struct LiarsDiceCli {
    /// Log engine and AI decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play against computer opponents; you take the first seat
    Play {
        /// Players at the table, you included
        #[arg(long, value_name = "N")]
        players: Option<usize>,
        /// Dice each player starts with
        #[arg(long, value_name = "N")]
        dice: Option<usize>,
        /// Count ones as wild
        #[arg(long)]
        wild: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Your name at the table
        #[arg(long, default_value = "You")]
        name: String,
    },
    /// Run computer-only games and report wins per profile
    Sim {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long, value_name = "N")]
        players: Option<usize>,
        #[arg(long, value_name = "N")]
        dice: Option<usize>,
        #[arg(long)]
        wild: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate the chance that a bid holds given your dice
    Odds {
        /// Your dice, comma separated (e.g. 1,4,4,6)
        #[arg(long)]
        hand: String,
        /// Dice on the table, yours included
        #[arg(long)]
        total: u32,
        #[arg(long)]
        count: u32,
        #[arg(long)]
        face: u8,
        #[arg(long)]
        wild: bool,
        #[arg(long, default_value_t = DECISION_TRIALS)]
        trials: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
