#![no_main]

use approx::assert_relative_eq;
use hilo_equity::core::Card;
use hilo_equity::equity::equity;
use hilo_equity::games::GameVariant;
use libfuzzer_sys::fuzz_target;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub game: u8,
    pub board: Vec<Card>,
    pub hands: Vec<Vec<Card>>,
    pub blockers: Vec<Card>,
    pub seed: u64,
}

fuzz_target!(|input: Input| {
    let games = GameVariant::all();
    let game = &games[usize::from(input.game) % games.len()];
    let mut rng = StdRng::seed_from_u64(input.seed);

    // Bad input is an error, never a panic.
    let Ok(results) = equity(game, &input.board, &input.hands, &input.blockers, 20, &mut rng) else {
        return;
    };

    assert_eq!(input.hands.len(), results.len());
    for r in &results {
        assert_eq!(r.high.count, r.high.win + r.high.tie + r.high.lose());
        let t = r.total();
        assert_relative_eq!(f64::from(t.count), t.win + t.tie + t.lose, epsilon = 1e-6);
        for out in &r.high_summary.outs {
            assert!(!input.board.contains(out));
            assert!(!input.blockers.contains(out));
        }
    }
});
