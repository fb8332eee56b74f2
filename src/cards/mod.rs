//! Cards and the deck.

pub mod card;
pub mod deck;

pub use card::{Attribute, Card, Color, Number, Shading, Shape};
pub use deck::Deck;
