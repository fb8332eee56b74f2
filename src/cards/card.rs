//! Cards and their attributes.
//!
//! A card is an immutable tuple of one value from each of four independent
//! three-valued attribute axes: color, shape, shading, and number of
//! symbols. Equality and hashing are structural, so two cards are equal iff
//! all four attributes match.
//!
//! Every attribute axis implements [`Attribute`], which exposes the three
//! variants and the "completing value" rule the whole game rests on: given
//! any two values, exactly one third value keeps the axis all-same or
//! all-different.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-valued card attribute axis.
///
/// The completing-value rule is what makes Set work: for any two cards
/// there is exactly one third card forming a set with them.
pub trait Attribute: Copy + Eq {
    /// The three variants of this axis.
    const VALUES: [Self; 3];

    /// The unique value completing `a` and `b` on this axis.
    ///
    /// Same inputs complete with themselves; distinct inputs complete with
    /// the remaining third variant.
    #[must_use]
    fn completing(a: Self, b: Self) -> Self {
        if a == b {
            a
        } else {
            // Two distinct variants always leave exactly one other.
            Self::VALUES
                .into_iter()
                .find(|&v| v != a && v != b)
                .unwrap()
        }
    }
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Attribute for Color {
    const VALUES: [Self; 3] = [Color::Red, Color::Green, Color::Purple];
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

impl Attribute for Shape {
    const VALUES: [Self; 3] = [Shape::Diamond, Shape::Oval, Shape::Squiggle];
}

/// Symbol shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Attribute for Shading {
    const VALUES: [Self; 3] = [Shading::Solid, Shading::Striped, Shading::Open];
}

/// Number of symbols on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

impl Attribute for Number {
    const VALUES: [Self; 3] = [Number::One, Number::Two, Number::Three];
}

/// A single Set card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub shape: Shape,
    pub shading: Shading,
    pub number: Number,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, shading: Shading, number: Number) -> Self {
        Self {
            color,
            shape,
            shading,
            number,
        }
    }

    /// The unique card that completes a set with `a` and `b`.
    ///
    /// A consequence of the three-valued attribute design: each axis has
    /// exactly one completing value, so each pair of distinct cards has
    /// exactly one completing card.
    #[must_use]
    pub fn completing(a: Card, b: Card) -> Card {
        Card {
            color: Attribute::completing(a.color, b.color),
            shape: Attribute::completing(a.shape, b.shape),
            shading: Attribute::completing(a.shading, b.shading),
            number: Attribute::completing(a.number, b.number),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} {:?}",
            self.number, self.shading, self.color, self.shape
        )
    }
}
