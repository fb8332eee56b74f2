//! Property-based tests for the rules kernel and hint enumeration.

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use set_engine::{
    is_set, Attribute, Card, Color, Deck, GameConfig, GameRng, Number, SetGame, Shading, Shape,
};

fn card_strategy() -> impl Strategy<Value = Card> {
    (0usize..3, 0usize..3, 0usize..3, 0usize..3).prop_map(|(c, s, f, n)| {
        Card::new(
            Color::VALUES[c],
            Shape::VALUES[s],
            Shading::VALUES[f],
            Number::VALUES[n],
        )
    })
}

/// The first `n` cards of a seed-shuffled deck.
fn tableau_of(seed: u64, n: usize) -> Vec<Card> {
    let mut rng = GameRng::new(seed);
    let mut deck = Deck::shuffled(&mut rng);
    (0..n).map(|_| deck.draw().unwrap()).collect()
}

proptest! {
    #[test]
    fn test_is_set_is_symmetric(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        let expected = is_set(&a, &b, &c);
        prop_assert_eq!(is_set(&a, &c, &b), expected);
        prop_assert_eq!(is_set(&b, &a, &c), expected);
        prop_assert_eq!(is_set(&b, &c, &a), expected);
        prop_assert_eq!(is_set(&c, &a, &b), expected);
        prop_assert_eq!(is_set(&c, &b, &a), expected);
    }

    #[test]
    fn test_completing_card_is_the_unique_set_partner(a in card_strategy(), b in card_strategy()) {
        prop_assume!(a != b);

        let third = Card::completing(a, b);
        prop_assert!(third != a && third != b);
        prop_assert!(is_set(&a, &b, &third));

        for &candidate in Deck::full().cards() {
            if candidate != a && candidate != b {
                prop_assert_eq!(is_set(&a, &b, &candidate), candidate == third);
            }
        }
    }

    #[test]
    fn test_shuffled_deck_covers_the_pool(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);

        let distinct: FxHashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(deck.remaining(), Deck::FULL_SIZE);
        prop_assert_eq!(distinct.len(), Deck::FULL_SIZE);
    }

    /// The lazy hint walk agrees with a brute-force scan on random
    /// tableaus of realistic size.
    #[test]
    fn test_hints_match_brute_force(seed in any::<u64>(), extra in 0usize..5) {
        let tableau = tableau_of(seed, 12 + 3 * extra);

        let mut expected = Vec::new();
        for i in 0..tableau.len() {
            for j in (i + 1)..tableau.len() {
                for k in (j + 1)..tableau.len() {
                    if is_set(&tableau[i], &tableau[j], &tableau[k]) {
                        expected.push([i, j, k]);
                    }
                }
            }
        }

        let actual: Vec<_> = set_engine::Hints::new(&tableau).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Arbitrary action sequences keep the engine's bookkeeping sound.
    #[test]
    fn test_random_play_preserves_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(0usize..32, 1..80),
    ) {
        let mut game = SetGame::new(GameConfig::default(), seed);

        for op in ops {
            match op {
                // Occasional deals and shuffles between taps.
                30 => game.deal_three(),
                31 => game.shuffle(),
                tap => {
                    if !game.tableau().is_empty() {
                        game.choose_card(tap % game.tableau().len());
                    }
                }
            }

            prop_assert!(game.selection().len() <= 3);
            for card in game.selection() {
                prop_assert!(game.tableau().contains(card));
            }

            let mut seen: FxHashSet<Card> = FxHashSet::default();
            for &card in game.tableau() {
                prop_assert!(seen.insert(card));
            }
            for &card in game.discarded() {
                prop_assert!(seen.insert(card));
            }
            prop_assert_eq!(seen.len() + game.deck_remaining(), Deck::FULL_SIZE);
        }
    }
}
