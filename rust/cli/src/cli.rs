//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::locale::LocaleSetting;

#[derive(Parser, Debug)]
#[command(
    name = "tarot",
    version,
    about = "Tarot Picker - draw and reveal tarot cards from a shuffled deck"
)]
pub struct TarotCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive drawing session on stdin
    Draw {
        /// Number of cards to draw (1-78)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=78))]
        count: Option<i64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        locale: Option<LocaleSetting>,
    },
    /// Draw the given positions once and print the reading
    Reading {
        /// Comma separated draw positions, e.g. 3,17,42
        #[arg(long)]
        positions: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        locale: Option<LocaleSetting>,
    },
    /// List the card catalog
    Deck {
        #[arg(long, value_enum)]
        locale: Option<LocaleSetting>,
    },
    /// Print a draw order
    Shuffle {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
