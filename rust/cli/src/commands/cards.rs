//! Lists the 52 recognized cards with their long names.

use crate::error::CliError;
use handeval_engine::cards::{all_suits, full_deck};
use std::io::Write;

pub fn handle_cards_command(out: &mut dyn Write) -> Result<(), CliError> {
    for suit in all_suits() {
        let row: Vec<String> = full_deck()
            .into_iter()
            .filter(|card| card.suit == suit)
            .map(|card| {
                format!(
                    "{:<4}{}",
                    card.to_short_string(),
                    card.to_long_string()
                )
            })
            .collect();
        writeln!(out, "{}:", suit.plural_name())?;
        for line in row {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}
