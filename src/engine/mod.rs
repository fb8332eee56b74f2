//! The game engine: rules kernel, hint enumeration, and game state.

pub mod game;
pub mod hints;
pub mod rules;

pub use game::{MatchResult, SetGame};
pub use hints::Hints;
pub use rules::is_set;
