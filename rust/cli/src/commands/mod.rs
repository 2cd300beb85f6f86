//! Command handler modules for the handeval CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - All errors propagated via the `CliError` enum

mod cards;
mod cfg;
mod eval;

pub use cards::handle_cards_command;
pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
