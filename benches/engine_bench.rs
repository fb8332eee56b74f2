//! Benchmarks for the rules kernel and hint enumeration.
//!
//! `hints` is the only O(n^3) operation in the engine; these benches keep
//! an eye on it at the largest tableau a real game reaches.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_engine::{is_set, Card, Deck, GameRng, Hints};

fn tableau_of(seed: u64, n: usize) -> Vec<Card> {
    let mut rng = GameRng::new(seed);
    let mut deck = Deck::shuffled(&mut rng);
    (0..n).map(|_| deck.draw().unwrap()).collect()
}

fn bench_is_set(c: &mut Criterion) {
    let cards = tableau_of(42, 3);

    c.bench_function("is_set", |b| {
        b.iter(|| {
            is_set(
                black_box(&cards[0]),
                black_box(&cards[1]),
                black_box(&cards[2]),
            )
        })
    });
}

fn bench_hints(c: &mut Criterion) {
    let tableau_12 = tableau_of(42, 12);
    let tableau_24 = tableau_of(42, 24);

    c.bench_function("hints/12-card tableau", |b| {
        b.iter(|| Hints::new(black_box(&tableau_12)).count())
    });

    c.bench_function("hints/24-card tableau", |b| {
        b.iter(|| Hints::new(black_box(&tableau_24)).count())
    });

    c.bench_function("hints/first hint only", |b| {
        b.iter(|| Hints::new(black_box(&tableau_24)).next())
    });
}

criterion_group!(benches, bench_is_set, bench_hints);
criterion_main!(benches);
