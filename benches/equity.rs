#[macro_use]
extern crate criterion;

use criterion::Criterion;
use hilo_equity::core::{Card, Hand};
use hilo_equity::equity::equity;
use hilo_equity::games::{HOLDEM, OMAHA_HILO, STUD};
use rand::{SeedableRng, rngs::StdRng};

fn cards(s: &str) -> Vec<Card> {
    Hand::new_from_str(s).unwrap().into()
}

fn holdem_flop(c: &mut Criterion) {
    let board = cards("AhKhQh");
    let hands = vec![cards("AcKc"), cards("2d2s")];
    c.bench_function("Holdem flop exact equity", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| equity(&HOLDEM, &board, &hands, &[], 1000, &mut rng))
    });
}

fn holdem_preflop(c: &mut Criterion) {
    let hands = vec![cards("AcAd"), cards("7s8s"), cards("KhQd")];
    c.bench_function("Holdem preflop 1000 deals", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| equity(&HOLDEM, &[], &hands, &[], 1000, &mut rng))
    });
}

fn omaha_hi_lo_turn(c: &mut Criterion) {
    let board = cards("2h3h7dKs");
    let hands = vec![cards("As4cJs9c"), cards("KdKcQdQc")];
    c.bench_function("Omaha hi/lo turn exact equity", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| equity(&OMAHA_HILO, &board, &hands, &[], 1000, &mut rng))
    });
}

fn stud_third_street(c: &mut Criterion) {
    let hands = vec![cards("AsAdKc"), cards("7h8h9h")];
    c.bench_function("Stud third street 1000 deals", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| equity(&STUD, &[], &hands, &[], 1000, &mut rng))
    });
}

criterion_group!(benches, holdem_flop, holdem_preflop, omaha_hi_lo_turn, stud_third_street);
criterion_main!(benches);
