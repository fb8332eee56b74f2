//! Game state and orchestration.
//!
//! [`SetGame`] owns the deck, the tableau of visible cards, the discard
//! pile of matched cards, the player's selection, and the score. Every
//! mutation goes through `choose_card`, `deal_three`, or `shuffle`; a
//! presentation layer reads state back through the accessor methods and
//! never holds aliases into the engine.
//!
//! ## Round resolution
//!
//! When the third card of a round is selected the trio is judged
//! immediately and recorded as the [`MatchResult`], but its consequences
//! (removing matched cards, adjusting the score) are applied lazily on the
//! *next* player action, whether that is a tap or a deal. This lets the
//! presentation layer keep the judged trio highlighted until the player
//! moves on.
//!
//! ## Invariants
//!
//! - Deck, tableau, and discard pile are mutually disjoint and their union
//!   is always the full 81-card pool.
//! - The selection is a subset of the tableau, never larger than 3.
//! - The tableau only grows by deals and only shrinks when a matched trio
//!   cannot be replaced from an exhausted deck.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng};
use crate::engine::hints::Hints;
use crate::engine::rules::is_set;

/// The judgement over the most recent completed trio.
///
/// Recorded when the third card of a round is selected and kept until the
/// round is resolved by the next player action, so the presentation layer
/// can highlight the trio as matched or mismatched in the meantime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the trio forms a valid set.
    pub is_set: bool,
    /// The three judged cards, in selection order.
    pub cards: [Card; 3],
}

impl MatchResult {
    /// Whether the given card belongs to the judged trio.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

/// A single game of Set.
///
/// Constructed once per game; starting a new game means constructing a new
/// `SetGame`. Single-threaded and synchronous: every operation completes
/// before returning and randomness is consumed only by the constructor and
/// `shuffle`.
#[derive(Clone, Debug)]
pub struct SetGame {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    tableau: Vec<Card>,
    /// Matched cards removed from play. Order is irrelevant; only
    /// membership and size matter.
    discard: FxHashSet<Card>,
    /// Currently selected cards, at most 3, in selection order.
    selection: SmallVec<[Card; 3]>,
    /// Judgement pending resolution, if a trio has been completed.
    match_result: Option<MatchResult>,
    score: i64,
}

impl SetGame {
    /// Start a new game: shuffle a fresh 81-card deck with the given seed
    /// and deal the initial tableau.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see [`GameConfig`]).
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.validate();

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::shuffled(&mut rng);

        let mut tableau = Vec::with_capacity(config.initial_tableau);
        for _ in 0..config.initial_tableau {
            // validate() caps the initial tableau at the deck size.
            tableau.push(deck.draw().unwrap());
        }

        Self {
            config,
            rng,
            deck,
            tableau,
            discard: FxHashSet::default(),
            selection: SmallVec::new(),
            match_result: None,
            score: 0,
        }
    }

    /// Start a new game with the default configuration.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), seed)
    }

    // === Player actions ===

    /// Toggle selection of the tableau card at `index`.
    ///
    /// While fewer than three cards are selected, tapping toggles
    /// membership. Completing a trio judges it immediately and records the
    /// [`MatchResult`]; the round is then *pending* and the next action
    /// resolves it. Tapping anywhere else resolves the pending round
    /// (removing a matched trio or charging the mismatch penalty) and
    /// starts a new selection with the tapped card. Tapping a card of a
    /// *matched* trio is a no-op until the board updates, since that card
    /// is about to be removed; mismatched cards stay on the tableau and
    /// remain tappable.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the current tableau. Producing such an
    /// index is a presentation-layer bug, not a recoverable condition.
    pub fn choose_card(&mut self, index: usize) {
        assert!(
            index < self.tableau.len(),
            "card index {} out of bounds for tableau of {}",
            index,
            self.tableau.len()
        );
        let chosen = self.tableau[index];

        if let Some(result) = self.match_result {
            // Cards of a matched trio are leaving the board; they are dead
            // to input until resolved.
            if result.is_set && result.contains(chosen) {
                return;
            }
            self.resolve_round();
            self.selection.push(chosen);
            return;
        }

        if let Some(pos) = self.selection.iter().position(|&c| c == chosen) {
            self.selection.remove(pos);
            return;
        }

        self.selection.push(chosen);
        if self.selection.len() == 3 {
            let cards = [self.selection[0], self.selection[1], self.selection[2]];
            self.match_result = Some(MatchResult {
                is_set: is_set(&cards[0], &cards[1], &cards[2]),
                cards,
            });
        }
    }

    /// Deal up to three more cards from the deck onto the tableau.
    ///
    /// A pending round is resolved first, the same resolve-then-act
    /// convention as `choose_card`. With an empty deck this is a no-op
    /// (after resolution). Dealing while a valid set was already visible
    /// charges `GameConfig::deal_penalty`.
    pub fn deal_three(&mut self) {
        self.resolve_round();

        if self.deck.is_empty() {
            return;
        }

        if self.config.deal_penalty > 0 && self.has_visible_set() {
            self.apply_penalty(self.config.deal_penalty);
        }

        for _ in 0..self.config.deal_size {
            match self.deck.draw() {
                Some(card) => self.tableau.push(card),
                None => break,
            }
        }
    }

    /// Randomly permute the order of the tableau.
    ///
    /// Membership, selection, match state, and score are untouched; only
    /// positions change.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.tableau);
    }

    // === Queries ===

    /// Enumerate every valid set on the current tableau as ascending index
    /// triples. Lazy and restartable; does not mutate the engine.
    #[must_use]
    pub fn hints(&self) -> Hints<'_> {
        Hints::new(&self.tableau)
    }

    /// Whether at least one valid set is visible on the tableau.
    #[must_use]
    pub fn has_visible_set(&self) -> bool {
        self.hints().next().is_some()
    }

    /// The currently visible cards, in tableau order.
    #[must_use]
    pub fn tableau(&self) -> &[Card] {
        &self.tableau
    }

    /// The currently selected cards, in selection order.
    ///
    /// Holds the completed trio while a round is pending resolution.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.selection
    }

    /// The judgement over the last completed trio, if one is pending.
    #[must_use]
    pub fn match_result(&self) -> Option<&MatchResult> {
        self.match_result.as_ref()
    }

    /// The current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Cards remaining in the face-down deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Matched cards removed from play.
    #[must_use]
    pub fn discarded(&self) -> &FxHashSet<Card> {
        &self.discard
    }

    /// Number of matched trios collected so far.
    #[must_use]
    pub fn sets_collected(&self) -> usize {
        self.discard.len() / 3
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Internals ===

    /// Apply the pending judgement, if any: remove a matched trio
    /// (replacing from the deck while it lasts) and award the bonus, or
    /// charge the mismatch penalty. Clears selection and match state.
    fn resolve_round(&mut self) {
        let Some(result) = self.match_result.take() else {
            return;
        };
        self.selection.clear();

        if result.is_set {
            self.score += self.config.match_bonus;
            for card in result.cards {
                let pos = self
                    .tableau
                    .iter()
                    .position(|&c| c == card)
                    .expect("judged card must still be on the tableau");
                match self.deck.draw() {
                    Some(replacement) => self.tableau[pos] = replacement,
                    None => {
                        self.tableau.remove(pos);
                    }
                }
                self.discard.insert(card);
            }
        } else {
            self.apply_penalty(self.config.mismatch_penalty);
        }
    }

    /// Deduct a penalty, clamping to the configured floor if one is set.
    fn apply_penalty(&mut self, penalty: i64) {
        self.score -= penalty;
        if let Some(floor) = self.config.score_floor {
            self.score = self.score.max(floor);
        }
    }
}
