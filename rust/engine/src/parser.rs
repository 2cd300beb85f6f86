//! Short-string to [`Card`] conversion.
//!
//! The parser owns a precomputed map from the 52 canonical short strings
//! (`"2H"`, `"10S"`, `"AH"`, ...) to card values. Lookups are exact and
//! case-sensitive.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::cards::{full_deck, Card};
use crate::errors::HandError;

#[derive(Debug, Clone)]
pub struct CardParser {
    cards: HashMap<String, Card>,
}

impl Default for CardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser {
    pub fn new() -> Self {
        let cards = full_deck()
            .into_iter()
            .map(|card| (card.to_short_string(), card))
            .collect();
        Self { cards }
    }

    /// Process-wide parser, built on first use and read-only afterwards.
    pub fn shared() -> &'static CardParser {
        static PARSER: OnceLock<CardParser> = OnceLock::new();
        PARSER.get_or_init(CardParser::new)
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.cards.contains_key(token)
    }

    pub fn parse(&self, token: &str) -> Result<Card, HandError> {
        self.cards
            .get(token)
            .copied()
            .ok_or_else(|| HandError::InvalidCard {
                cards: vec![token.to_string()],
            })
    }

    /// Parses every token, or reports all unrecognized tokens in input order.
    pub fn parse_all<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Card>, HandError> {
        let mut parsed = Vec::with_capacity(tokens.len());
        let mut invalid = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            match self.cards.get(token) {
                Some(&card) => parsed.push(card),
                None => invalid.push(token.to_string()),
            }
        }

        if invalid.is_empty() {
            Ok(parsed)
        } else {
            Err(HandError::InvalidCard { cards: invalid })
        }
    }
}
