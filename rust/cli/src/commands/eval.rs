//! Hand evaluation command.
//!
//! Validates the cards given on the command line, optionally asks for missing
//! cards on stdin, and prints the highest category of the hand.

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::ui;
use handeval_engine::category::Category;
use handeval_engine::hand::Hand;
use handeval_engine::parser::CardParser;
use handeval_engine::validator::MAX_CARDS;
use serde::Serialize;
use std::io::{BufRead, Write};

#[derive(Debug, Serialize)]
struct EvalOutput {
    cards: Vec<String>,
    rank: Category,
}

/// Handle the eval command.
///
/// # Arguments
///
/// * `cards` - Cards passed on the command line, in short notation
/// * `format` - Text or JSON output
/// * `prompt` - Whether to read missing cards from `input`
/// * `input` - Source of interactive answers (stdin in production)
/// * `out` - Output stream for the result
/// * `err` - Stream for prompts and warnings
///
/// # Errors
///
/// Returns `CliError::Hand` when the cards fail validation.
pub fn handle_eval_command(
    mut cards: Vec<String>,
    format: OutputFormat,
    prompt: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if prompt && cards.len() < MAX_CARDS {
        prompt_for_cards(&mut cards, input, err)?;
    }

    let hand = Hand::from_tokens(&cards)?;
    let rank = hand.category();

    match format {
        OutputFormat::Text => {
            ui::write_title(out, "You chose the following cards:")?;
            ui::write_listing(out, &hand.long_names())?;
            ui::write_title(out, "The highest hand you have is:")?;
            ui::write_block(out, rank.as_str())?;
        }
        OutputFormat::Json => {
            let output = EvalOutput {
                cards: hand.short_names(),
                rank,
            };
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        }
    }
    Ok(())
}

// Reads whitespace separated cards line by line until five are collected or
// input ends. Unknown or already chosen cards are refused and the question is
// asked again. Extra cards beyond five are dropped with a warning.
fn prompt_for_cards(
    cards: &mut Vec<String>,
    input: &mut dyn BufRead,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let parser = CardParser::shared();

    while cards.len() < MAX_CARDS {
        let question = if cards.is_empty() {
            "Choose a card"
        } else {
            "Choose another card"
        };
        write!(err, "{} ({} of {}): ", question, cards.len() + 1, MAX_CARDS)?;
        err.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(err)?;
            break;
        }

        let mut refused = Vec::new();
        for token in line.split_whitespace() {
            if parser.is_valid(token) && !cards.iter().any(|c| c == token) {
                cards.push(token.to_string());
            } else {
                refused.push(token);
            }
        }
        if !refused.is_empty() {
            ui::display_warning(
                err,
                &format!("Not available, choose again: {}", refused.join(", ")),
            )?;
        }

        if cards.len() > MAX_CARDS {
            ui::display_warning(
                err,
                &format!(
                    "You chose more than {0} cards. Only the first {0} will be used.",
                    MAX_CARDS
                ),
            )?;
            cards.truncate(MAX_CARDS);
        }
    }
    Ok(())
}
