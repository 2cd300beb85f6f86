use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;
use crate::parser::CardParser;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spade,
    /// Hearts suit (♥)
    Heart,
    /// Diamonds suit (♦)
    Diamond,
    /// Clubs suit (♣)
    Club,
}

impl Suit {
    /// Single-letter initial used in the short card notation.
    pub fn initial(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }

    /// Plural name used in the long card notation, e.g. "Hearts".
    pub fn plural_name(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Ace is low (1); evaluation remaps it to 14 where a high ace is needed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Numeric value in `1..=13`.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    /// Token used in the short notation: the numeral for 2-10, otherwise the
    /// first letter of the name.
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; two cards are equal iff rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Canonical short form, e.g. `2H`, `10S`, `AH`.
    pub fn to_short_string(&self) -> String {
        self.to_string()
    }

    /// Canonical long form, e.g. `Two of Hearts`.
    pub fn to_long_string(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.plural_name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.initial())
    }
}

impl FromStr for Card {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardParser::shared().parse(s)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spade, Suit::Diamond, Suit::Heart, Suit::Club]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
