//! Classification of a hand into its highest [`Category`].
//!
//! The evaluator answers one yes/no question per category and reports the
//! first category, in precedence order, whose predicate holds. It does not
//! rank hands against each other.
//!
//! Aces are stored as 1. Straight detection first checks contiguity with the
//! ace low, then retries with the ace as 14, so both `A-2-3-4-5` and
//! `10-J-Q-K-A` qualify. Contiguity is tested on the set of ranks present,
//! which means a paired run such as `5-5-6-6-7` also counts as a straight.

use crate::cards::{Card, Rank};
use crate::category::Category;

const ACE_HIGH: u8 = 14;
const BROADWAY: [u8; 5] = [10, 11, 12, 13, ACE_HIGH];

#[derive(Debug, Clone)]
pub struct HandEvaluator {
    cards: Vec<Card>,
    // occurrences per rank value, index 1..=13
    rank_counts: [usize; 14],
}

impl HandEvaluator {
    /// Builds an evaluator over `cards`. Callers validate the hand first;
    /// other card counts are accepted and evaluated as-is.
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0usize; 14];
        for card in cards {
            rank_counts[card.rank.value() as usize] += 1;
        }
        Self {
            cards: cards.to_vec(),
            rank_counts,
        }
    }

    pub fn has_one_pair(&self) -> bool {
        self.has_count(2)
    }

    pub fn has_two_pair(&self) -> bool {
        self.rank_counts.iter().filter(|&&c| c == 2).count() == 2
    }

    pub fn has_three_of_a_kind(&self) -> bool {
        self.has_count(3)
    }

    pub fn has_four_of_a_kind(&self) -> bool {
        self.has_count(4)
    }

    pub fn has_full_house(&self) -> bool {
        self.has_one_pair() && self.has_three_of_a_kind()
    }

    pub fn has_flush(&self) -> bool {
        match self.cards.split_first() {
            Some((first, rest)) => rest.iter().all(|c| c.suit == first.suit),
            None => false,
        }
    }

    pub fn has_straight(&self) -> bool {
        let values: Vec<u8> = self.cards.iter().map(|c| c.rank.value()).collect();
        if is_contiguous(&values) {
            return true;
        }
        self.has_ace() && is_contiguous(&self.ace_high_values())
    }

    pub fn has_straight_flush(&self) -> bool {
        self.has_straight() && self.has_flush()
    }

    pub fn has_royal_flush(&self) -> bool {
        if !self.has_straight_flush() {
            return false;
        }
        let mut values = self.ace_high_values();
        values.sort_unstable();
        values.dedup();
        values == BROADWAY
    }

    /// The highest category whose predicate holds.
    pub fn highest_rank(&self) -> Category {
        if self.has_royal_flush() {
            Category::RoyalFlush
        } else if self.has_straight_flush() {
            Category::StraightFlush
        } else if self.has_four_of_a_kind() {
            Category::FourOfAKind
        } else if self.has_full_house() {
            Category::FullHouse
        } else if self.has_flush() {
            Category::Flush
        } else if self.has_straight() {
            Category::Straight
        } else if self.has_three_of_a_kind() {
            Category::ThreeOfAKind
        } else if self.has_two_pair() {
            Category::TwoPair
        } else if self.has_one_pair() {
            Category::OnePair
        } else {
            Category::HighCard
        }
    }

    /// Whether the predicate for `category` holds. `HighCard` always holds.
    pub fn matches(&self, category: Category) -> bool {
        match category {
            Category::HighCard => true,
            Category::OnePair => self.has_one_pair(),
            Category::TwoPair => self.has_two_pair(),
            Category::ThreeOfAKind => self.has_three_of_a_kind(),
            Category::Straight => self.has_straight(),
            Category::Flush => self.has_flush(),
            Category::FullHouse => self.has_full_house(),
            Category::FourOfAKind => self.has_four_of_a_kind(),
            Category::StraightFlush => self.has_straight_flush(),
            Category::RoyalFlush => self.has_royal_flush(),
        }
    }

    fn has_count(&self, n: usize) -> bool {
        self.rank_counts.contains(&n)
    }

    fn has_ace(&self) -> bool {
        self.rank_counts[Rank::Ace.value() as usize] > 0
    }

    fn ace_high_values(&self) -> Vec<u8> {
        self.cards
            .iter()
            .map(|c| match c.rank {
                Rank::Ace => ACE_HIGH,
                r => r.value(),
            })
            .collect()
    }
}

// Every value between min and max is present.
fn is_contiguous(values: &[u8]) -> bool {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return false;
    };
    (min..=max).all(|v| values.contains(&v))
}
