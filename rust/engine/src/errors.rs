use thiserror::Error;

/// Errors raised while turning raw input into a hand.
///
/// Each error is scoped to a single evaluation call; retrying with the same
/// input yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("The following cards are invalid: {}", .cards.join(", "))]
    InvalidCard { cards: Vec<String> },
    #[error("The following cards are duplicated: {}", .cards.join(", "))]
    NonUniqueCards { cards: Vec<String> },
    #[error("Expected {expected} cards, got {actual}")]
    InvalidNumberOfCards { expected: usize, actual: usize },
}

impl HandError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            HandError::InvalidCard { .. } => "invalid_card",
            HandError::NonUniqueCards { .. } => "non_unique_cards",
            HandError::InvalidNumberOfCards { .. } => "invalid_number_of_cards",
        }
    }
}
