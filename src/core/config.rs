//! Game configuration.
//!
//! Scoring and layout policy live here so the engine itself stays free of
//! magic numbers. Callers that want the classic rules can use
//! `GameConfig::default()`; builder methods tweak individual policies.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

/// Scoring and layout policy for a game of Set.
///
/// ## Defaults
///
/// - 12 cards dealt at the start, 3 per deal
/// - +3 for a matched set, -2 for a mismatch
/// - -1 for dealing while a set was already visible
/// - no score floor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards on the tableau at the start of a game.
    pub initial_tableau: usize,

    /// Cards added per deal.
    pub deal_size: usize,

    /// Score awarded when a matched trio is resolved.
    pub match_bonus: i64,

    /// Score deducted when a mismatched trio is resolved.
    pub mismatch_penalty: i64,

    /// Score deducted for dealing while a valid set was already visible.
    /// Zero disables the penalty.
    pub deal_penalty: i64,

    /// Lower bound the score is clamped to after penalties.
    /// `None` leaves the score unbounded below.
    pub score_floor: Option<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_tableau: 12,
            deal_size: 3,
            match_bonus: 3,
            mismatch_penalty: 2,
            deal_penalty: 1,
            score_floor: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial tableau size.
    ///
    /// Must be a positive multiple of the deal size and no larger than the
    /// 81-card deck (checked when the game is constructed).
    #[must_use]
    pub fn with_initial_tableau(mut self, cards: usize) -> Self {
        self.initial_tableau = cards;
        self
    }

    /// Set the number of cards added per deal.
    ///
    /// The initial tableau must stay a multiple of this (checked when the
    /// game is constructed).
    #[must_use]
    pub fn with_deal_size(mut self, cards: usize) -> Self {
        self.deal_size = cards;
        self
    }

    /// Set the match bonus.
    #[must_use]
    pub fn with_match_bonus(mut self, bonus: i64) -> Self {
        self.match_bonus = bonus;
        self
    }

    /// Set the mismatch penalty.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    /// Set the penalty for dealing while a set was visible (0 disables).
    #[must_use]
    pub fn with_deal_penalty(mut self, penalty: i64) -> Self {
        self.deal_penalty = penalty;
        self
    }

    /// Clamp the score to the given floor after penalties.
    #[must_use]
    pub fn with_score_floor(mut self, floor: i64) -> Self {
        self.score_floor = Some(floor);
        self
    }

    /// Validate the configuration. Called by the game constructor.
    pub(crate) fn validate(&self) {
        assert!(self.deal_size > 0, "Deal size must be positive");
        assert!(
            self.initial_tableau > 0 && self.initial_tableau % self.deal_size == 0,
            "Initial tableau must be a positive multiple of the deal size"
        );
        assert!(
            self.initial_tableau <= Deck::FULL_SIZE,
            "Initial tableau cannot exceed the {}-card deck",
            Deck::FULL_SIZE
        );
        assert!(self.match_bonus >= 0, "Match bonus must be non-negative");
        assert!(
            self.mismatch_penalty >= 0 && self.deal_penalty >= 0,
            "Penalties must be non-negative"
        );
    }
}
