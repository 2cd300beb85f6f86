//! # handeval CLI Library
//!
//! Command-line interface for the handeval poker hand evaluator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["handeval", "eval", "2H", "KC", "4D", "10S", "AH"];
//! let code = handeval_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Evaluate a five-card hand
//! - `cards`: List the recognized cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod ui;

use cli::{Commands, HandevalCli};
use commands::{handle_cards_command, handle_cfg_command, handle_eval_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. Interactive prompts read from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive answers from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["eval", "cards", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandevalCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: handeval <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: handeval --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Eval {
            cards,
            format,
            no_prompt,
        } => match config::load() {
            Ok(cfg) => handle_eval_command(
                cards,
                format.unwrap_or(cfg.format),
                cfg.prompt && !no_prompt,
                input,
                out,
                err,
            ),
            Err(e) => Err(CliError::Config(e.to_string())),
        },
        Commands::Cards => handle_cards_command(out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(Vec::new());
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["handeval", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("eval"));
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["handeval", "shuffle"]);
        assert_eq!(code, 2);
        assert!(err.contains("Commands:"));
        assert!(err.contains("  eval"));
    }

    #[test]
    fn cards_command_dispatch() {
        let (code, out, _) = run_args(&["handeval", "cards"]);
        assert_eq!(code, 0);
        assert!(out.contains("Spades:"));
    }
}
