#[macro_use]
extern crate criterion;

use criterion::Criterion;
use hilo_equity::core::{Card, FlatDeck, ValueFunction};
use hilo_equity::games::Selection;
use rand::{SeedableRng, rngs::StdRng};

fn sample(n: usize) -> Vec<Card> {
    let mut d = FlatDeck::default();
    d.shuffle(&mut StdRng::seed_from_u64(420));
    d[..n].to_vec()
}

fn value_one(c: &mut Criterion) {
    let cards = sample(5);
    let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("High value of one 5 card hand", move |b| {
        b.iter(|| ValueFunction::High.evaluate(&five))
    });
    c.bench_function("Deuce seven low value of one 5 card hand", move |b| {
        b.iter(|| ValueFunction::DeuceSevenLow.evaluate(&five))
    });
}

fn value_holdem(c: &mut Criterion) {
    let cards = sample(7);
    c.bench_function("Best holdem hand from 2 + 5", move |b| {
        b.iter(|| Selection::Holdem.best_value(&cards[2..], &cards[..2], ValueFunction::High))
    });
}

fn value_omaha(c: &mut Criterion) {
    let cards = sample(9);
    c.bench_function("Best omaha low from 4 + 5", move |b| {
        b.iter(|| Selection::Omaha.best_value(&cards[4..], &cards[..4], ValueFunction::AceFiveLow8))
    });
}

criterion_group!(benches, value_one, value_holdem, value_omaha);
criterion_main!(benches);
