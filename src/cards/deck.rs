//! The face-down deck.
//!
//! A full deck is the Cartesian product of the four attribute axes:
//! exactly 3^4 = 81 distinct cards, each appearing once. Cards are drawn
//! from the top; nothing is ever put back.

use serde::{Deserialize, Serialize};

use super::card::{Attribute, Card, Color, Number, Shading, Shape};
use crate::core::GameRng;

/// The not-yet-dealt remainder of the 81-card pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vec.
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const FULL_SIZE: usize = 81;

    /// Build a full, unshuffled deck: every attribute combination once.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(Self::FULL_SIZE);
        for color in Color::VALUES {
            for shape in Shape::VALUES {
                for shading in Shading::VALUES {
                    for number in Number::VALUES {
                        cards.push(Card::new(color, shape, shading, number));
                    }
                }
            }
        }
        Self { cards }
    }

    /// Build a full deck in a uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::full();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Draw the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
