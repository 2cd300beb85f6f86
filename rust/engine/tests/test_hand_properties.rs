use handeval_engine::cards::{full_deck, Card};
use handeval_engine::category::Category;
use handeval_engine::evaluator::HandEvaluator;
use handeval_engine::hand::Hand;
use handeval_engine::parser::CardParser;
use handeval_engine::validator::validate;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SAMPLES: usize = 20_000;

fn sample_hands(seed: u64) -> impl Iterator<Item = Vec<Card>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut deck = full_deck();
    (0..SAMPLES).map(move |_| {
        deck.shuffle(&mut rng);
        deck[..5].to_vec()
    })
}

#[test]
fn highest_rank_is_the_first_true_predicate() {
    for cards in sample_hands(42) {
        let eval = HandEvaluator::new(&cards);
        let expected = Category::ALL
            .iter()
            .rev()
            .copied()
            .find(|&category| eval.matches(category))
            .unwrap();
        assert_eq!(eval.highest_rank(), expected, "hand {:?}", cards);
    }
}

#[test]
fn distinct_recognized_tokens_always_validate() {
    for cards in sample_hands(7) {
        let tokens: Vec<String> = cards.iter().map(Card::to_short_string).collect();
        assert_eq!(validate(&tokens), Ok(()), "tokens {:?}", tokens);

        let hand = Hand::from_tokens(&tokens).unwrap();
        assert_eq!(hand.category(), HandEvaluator::new(&cards).highest_rank());
    }
}

#[test]
fn short_strings_round_trip_for_every_card() {
    let parser = CardParser::shared();
    for card in full_deck() {
        assert_eq!(parser.parse(&card.to_short_string()), Ok(card));
        assert!(card.to_long_string().contains(" of "));
    }
}

#[test]
fn sampling_reaches_common_categories() {
    let mut seen = std::collections::HashSet::new();
    for cards in sample_hands(2024) {
        seen.insert(HandEvaluator::new(&cards).highest_rank());
    }
    for category in [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
    ] {
        assert!(seen.contains(&category), "{category} never sampled");
    }
}
