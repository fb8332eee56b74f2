//! The set-validity kernel.
//!
//! Three cards form a set when, for each of the four attributes
//! independently, the three values are either all identical or pairwise
//! distinct. Exactly two equal values on any axis breaks the set. This
//! single predicate is what every other engine operation orchestrates
//! around.

use crate::cards::{Attribute, Card};

/// Whether one attribute axis is all-same or all-different across three
/// values.
fn axis_ok<A: Attribute>(a: A, b: A, c: A) -> bool {
    let all_same = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_same || all_distinct
}

/// Whether three cards form a valid set.
///
/// Pure and symmetric under any permutation of its arguments.
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    axis_ok(a.color, b.color, c.color)
        && axis_ok(a.shape, b.shape, c.shape)
        && axis_ok(a.shading, b.shading, c.shading)
        && axis_ok(a.number, b.number, c.number)
}
