//! Command-line argument definitions.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "handeval",
    version,
    about = "Evaluate a five-card poker hand",
    long_about = None
)]
pub struct HandevalCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a poker hand
    #[command(
        long_about = "Evaluate a poker hand.\n\nPass the cards as a space separated list of 5 cards in short notation, \
                      e.g. 2H for Two of Hearts:\n\n    handeval eval 2H KC 4D 10S AH"
    )]
    Eval {
        /// The cards to evaluate in short notation (e.g. 2H for Two of Hearts)
        cards: Vec<String>,
        /// Output format (overrides HANDEVAL_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Never prompt for missing cards
        #[arg(long)]
        no_prompt: bool,
    },
    /// List the recognized cards
    Cards,
    /// Display the resolved configuration
    Cfg,
}
