//! # handeval-engine: Poker Hand Evaluation Core
//!
//! Classifies a single five-card poker hand into its highest-ranking
//! category ("Flush", "Full House", ...). Input can be raw short strings
//! (`"2H"`, `"10S"`, `"AH"`) or typed [`cards::Card`] values.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card universe
//! - [`parser`] - Short-string to card conversion
//! - [`validator`] - Membership, uniqueness and count checks
//! - [`evaluator`] - Category predicates and precedence
//! - [`category`] - The ten hand categories and their display names
//! - [`hand`] - Validated five-card hands and one-shot evaluation
//! - [`errors`] - Error types for invalid input
//!
//! ## Quick Start
//!
//! ```rust
//! use handeval_engine::category::Category;
//! use handeval_engine::hand::evaluate_tokens;
//!
//! let category = evaluate_tokens(&["AC", "KC", "QC", "JC", "10C"]).unwrap();
//! assert_eq!(category, Category::RoyalFlush);
//! assert_eq!(category.to_string(), "Royal Flush");
//! ```
//!
//! ## Validation
//!
//! Invalid input is reported with every offending card:
//!
//! ```rust
//! use handeval_engine::errors::HandError;
//! use handeval_engine::validator::validate;
//!
//! match validate(&["2H", "2H", "JC", "KH", "3D"]) {
//!     Err(HandError::NonUniqueCards { cards }) => assert_eq!(cards, vec!["2H"]),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod cards;
pub mod category;
pub mod errors;
pub mod evaluator;
pub mod hand;
pub mod parser;
pub mod validator;

pub use category::Category;
pub use errors::HandError;
pub use hand::{evaluate_tokens, Hand};
