//! Hint enumeration.
//!
//! A hint is an index triple identifying a valid set on the current
//! tableau. [`Hints`] walks every `i < j < k` combination in ascending
//! order and yields the ones passing the set-validity kernel. The walk is
//! lazy, so a caller that only wants to know whether any set exists pays
//! for at most one full scan, and a "cheat" feature can pull hints one at
//! a time.
//!
//! Enumeration is O(n^3) in tableau size (n is at most ~24 in practice)
//! and runs only on explicit request, never per frame.

use crate::cards::Card;
use crate::engine::rules::is_set;

/// Lazy iterator over all valid-set index triples on a tableau.
///
/// Yields triples `[i, j, k]` with `i < j < k` in ascending lexicographic
/// order, which makes the sequence deterministic for a given tableau.
/// Borrows the tableau, so the engine cannot be mutated mid-walk;
/// re-calling `SetGame::hints` restarts the enumeration.
#[derive(Clone, Debug)]
pub struct Hints<'a> {
    tableau: &'a [Card],
    /// Next candidate combination, or `None` once exhausted.
    next: Option<[usize; 3]>,
}

impl<'a> Hints<'a> {
    /// Start an enumeration over the given tableau.
    #[must_use]
    pub fn new(tableau: &'a [Card]) -> Self {
        let next = if tableau.len() >= 3 {
            Some([0, 1, 2])
        } else {
            None
        };
        Self { tableau, next }
    }

    /// Advance `combo` to the next `i < j < k` combination.
    fn advance(combo: [usize; 3], len: usize) -> Option<[usize; 3]> {
        let [i, j, k] = combo;
        if k + 1 < len {
            Some([i, j, k + 1])
        } else if j + 2 < len {
            Some([i, j + 1, j + 2])
        } else if i + 3 < len {
            Some([i + 1, i + 2, i + 3])
        } else {
            None
        }
    }
}

impl Iterator for Hints<'_> {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(combo) = self.next {
            self.next = Self::advance(combo, self.tableau.len());

            let [i, j, k] = combo;
            if is_set(&self.tableau[i], &self.tableau[j], &self.tableau[k]) {
                return Some(combo);
            }
        }
        None
    }
}
