use serde::Serialize;

use crate::cards::Card;
use crate::category::Category;
use crate::errors::HandError;
use crate::evaluator::HandEvaluator;
use crate::parser::CardParser;
use crate::validator::{validate, validate_cards, MAX_CARDS};

/// A validated five-card hand.
///
/// The only way to build a `Hand` is through [`Hand::from_tokens`] or
/// [`Hand::from_cards`], so a `Hand` always holds five distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: [Card; MAX_CARDS],
}

impl Hand {
    /// Validates and parses raw short strings such as `["2H", "10S", ...]`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        validate(tokens)?;
        let cards = CardParser::shared().parse_all(tokens)?;
        Self::from_validated(&cards)
    }

    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        validate_cards(cards)?;
        Self::from_validated(cards)
    }

    fn from_validated(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; MAX_CARDS] =
            cards
                .try_into()
                .map_err(|_| HandError::InvalidNumberOfCards {
                    expected: MAX_CARDS,
                    actual: cards.len(),
                })?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; MAX_CARDS] {
        &self.cards
    }

    pub fn short_names(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_short_string).collect()
    }

    pub fn long_names(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_long_string).collect()
    }

    pub fn evaluator(&self) -> HandEvaluator {
        HandEvaluator::new(&self.cards)
    }

    pub fn category(&self) -> Category {
        let category = self.evaluator().highest_rank();
        tracing::debug!(hand = ?self.short_names(), %category, "hand classified");
        category
    }
}

/// Validates, parses and classifies a hand given as short strings.
pub fn evaluate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Category, HandError> {
    Hand::from_tokens(tokens).map(|hand| hand.category())
}
