//! # set-engine
//!
//! A rules engine for the card game **Set**.
//!
//! The deck is the Cartesian product of four three-valued attributes
//! (color, shape, shading, number): 3^4 = 81 distinct cards. Three cards
//! form a *set* when, for every attribute independently, the three values
//! are either all identical or all distinct.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no rendering, input, or animation concerns. A
//!    presentation layer drives the engine through a narrow API
//!    (`choose_card`, `deal_three`, `shuffle`, `hints`) and reads state back.
//!
//! 2. **Deterministic**: randomness is injected as a seedable generator.
//!    The same seed always produces the same shuffle, so every game is
//!    reproducible in tests.
//!
//! 3. **Total operations**: no error returns. The single caller-contract
//!    violation (an out-of-range tableau index) is a defensive assert.
//!
//! ## Modules
//!
//! - `core`: configuration and deterministic RNG
//! - `cards`: attributes, cards, and the 81-card deck
//! - `engine`: the set-validity kernel, hint enumeration, and game state

pub mod cards;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState};

pub use crate::cards::{Attribute, Card, Color, Deck, Number, Shading, Shape};

pub use crate::engine::{is_set, Hints, MatchResult, SetGame};
