//! Structural checks applied to a hand before it is evaluated.
//!
//! A hand must contain exactly [`MAX_CARDS`] cards, every card must be one of
//! the 52 recognized cards and no card may appear twice. Checks run in that
//! order: membership, uniqueness, count. The first failing check wins.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cards::Card;
use crate::errors::HandError;
use crate::parser::CardParser;

pub const MAX_CARDS: usize = 5;

/// Either raw short strings or already-typed cards.
#[derive(Debug, Clone, Copy)]
pub enum HandInput<'a> {
    Tokens(&'a [String]),
    Cards(&'a [Card]),
}

pub fn validate_input(input: HandInput<'_>) -> Result<(), HandError> {
    match input {
        HandInput::Tokens(tokens) => validate(tokens),
        HandInput::Cards(cards) => validate_cards(cards),
    }
}

/// Validates raw short-string tokens.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<(), HandError> {
    let parser = CardParser::shared();
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

    let invalid: Vec<String> = tokens
        .iter()
        .filter(|token| !parser.is_valid(token))
        .map(|token| token.to_string())
        .collect();
    if !invalid.is_empty() {
        return Err(HandError::InvalidCard { cards: invalid });
    }

    check_shape(tokens.into_iter(), |token| token.to_string())
}

/// Validates typed cards. Membership holds by construction.
pub fn validate_cards(cards: &[Card]) -> Result<(), HandError> {
    check_shape(cards.iter().copied(), |card| card.to_short_string())
}

fn check_shape<T, I, F>(items: I, label: F) -> Result<(), HandError>
where
    T: Eq + Hash + Copy,
    I: Iterator<Item = T>,
    F: Fn(T) -> String,
{
    let items: Vec<T> = items.collect();

    let duplicates = duplicates_in_order(&items);
    if !duplicates.is_empty() {
        return Err(HandError::NonUniqueCards {
            cards: duplicates.into_iter().map(label).collect(),
        });
    }

    if items.len() != MAX_CARDS {
        return Err(HandError::InvalidNumberOfCards {
            expected: MAX_CARDS,
            actual: items.len(),
        });
    }

    Ok(())
}

// Each repeated item once, in order of first occurrence.
fn duplicates_in_order<T: Eq + Hash + Copy>(items: &[T]) -> Vec<T> {
    let mut counts: HashMap<T, usize> = HashMap::with_capacity(items.len());
    for &item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut reported = Vec::new();
    for &item in items {
        if counts.get(&item).copied().unwrap_or(0) > 1 && !reported.contains(&item) {
            reported.push(item);
        }
    }
    reported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn accepts_five_distinct_cards() {
        assert_eq!(validate(&["2H", "KC", "4D", "10S", "AH"]), Ok(()));
    }

    #[test]
    fn all_invalid_cards_are_reported() {
        assert_eq!(
            validate(&["A", "B", "C", "D", "E"]),
            Err(HandError::InvalidCard {
                cards: strings(&["A", "B", "C", "D", "E"])
            })
        );
    }

    #[test]
    fn some_invalid_cards_are_reported() {
        assert_eq!(
            validate(&["2H", "3D", "JC", "KH", "1A"]),
            Err(HandError::InvalidCard {
                cards: strings(&["1A"])
            })
        );
    }

    #[test]
    fn membership_is_checked_before_count() {
        assert_eq!(
            validate(&["ZZ"]),
            Err(HandError::InvalidCard {
                cards: strings(&["ZZ"])
            })
        );
    }

    #[test]
    fn duplicates_are_reported_once_each() {
        assert_eq!(
            validate(&["2H", "2H", "JC", "KH", "3D"]),
            Err(HandError::NonUniqueCards {
                cards: strings(&["2H"])
            })
        );
        assert_eq!(
            validate(&["KH", "2H", "KH", "2H", "KH"]),
            Err(HandError::NonUniqueCards {
                cards: strings(&["KH", "2H"])
            })
        );
    }

    #[test]
    fn uniqueness_is_checked_before_count() {
        assert_eq!(
            validate(&["2H", "2H"]),
            Err(HandError::NonUniqueCards {
                cards: strings(&["2H"])
            })
        );
    }

    #[test]
    fn wrong_counts_are_rejected() {
        assert_eq!(
            validate(&["2H"]),
            Err(HandError::InvalidNumberOfCards {
                expected: 5,
                actual: 1
            })
        );
        assert_eq!(
            validate(&["2H", "3H", "4H", "5H", "6H", "7H"]),
            Err(HandError::InvalidNumberOfCards {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            validate::<&str>(&[]),
            Err(HandError::InvalidNumberOfCards {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn typed_cards_share_uniqueness_and_count_checks() {
        let two_hearts = Card::new(Rank::Two, Suit::Heart);
        let king_clubs = Card::new(Rank::King, Suit::Club);

        assert_eq!(
            validate_cards(&[two_hearts, two_hearts, king_clubs]),
            Err(HandError::NonUniqueCards {
                cards: strings(&["2H"])
            })
        );
        assert_eq!(
            validate_cards(&[two_hearts, king_clubs]),
            Err(HandError::InvalidNumberOfCards {
                expected: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn tagged_input_dispatches_to_both_paths() {
        let tokens = strings(&["2H", "KC", "4D", "10S", "AH"]);
        assert_eq!(validate_input(HandInput::Tokens(&tokens)), Ok(()));

        let cards = CardParser::shared().parse_all(&tokens).unwrap();
        assert_eq!(validate_input(HandInput::Cards(&cards)), Ok(()));
    }
}
