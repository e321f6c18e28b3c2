//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::RngKind;

#[derive(Parser, Debug)]
#[command(
    name = "flopnuts",
    version,
    about = "Practice spotting the nuts on Texas Hold'em flops"
)]
pub struct FlopnutsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal flops and guess the nuts interactively
    Practice {
        /// Seed for dealing (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many flops
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Generator used to deal
        #[arg(long, value_enum)]
        rng: Option<RngKind>,
    },
    /// Show the nuts for a flop, e.g. --flop "Ah Kh Qh"
    Nuts {
        #[arg(long)]
        flop: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check one guess against the nuts of a flop
    Check {
        #[arg(long)]
        flop: String,
        #[arg(long)]
        guess: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Deal several flops and show the nuts for each
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,
        #[arg(long, value_enum)]
        rng: Option<RngKind>,
    },
    /// Print the first draws of the seeded dealing generator
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
