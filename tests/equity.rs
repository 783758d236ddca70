use approx::assert_relative_eq;
use hilo_equity::core::{Card, Hand, HandValue, Rank};
use hilo_equity::equity::{HiLoEquity, RngEquityCalculatorBuilder};
use hilo_equity::games::GameVariant;
use rand::{SeedableRng, rngs::StdRng};

fn cards(s: &str) -> Vec<Card> {
    Hand::new_from_str(s).unwrap().into()
}

fn calculate(game: &str, board: &str, hands: &[&str]) -> Vec<HiLoEquity> {
    RngEquityCalculatorBuilder::default()
        .game(*GameVariant::from_name(game).unwrap())
        .board(cards(board))
        .hands(hands.iter().map(|h| cards(h)).collect())
        .iterations(300)
        .rng(StdRng::seed_from_u64(2024))
        .build()
        .unwrap()
        .calculate()
        .unwrap()
}

#[test_log::test]
fn every_game_runs() {
    let cases: [(&str, &str, &[&str]); 8] = [
        ("holdem", "", &["AcKc", "2d2s"]),
        ("omaha", "AhKhQh", &["AcKc9s8s", "2d2s3c4c"]),
        ("omahahilo", "Ah5h8c", &["As2s3c4c", "KdKsQcJc"]),
        ("draw", "", &["AcKcQc", "2d2s"]),
        ("lowdraw", "", &["7s5d4c", "8s6d"]),
        ("stud", "", &["AsAdKc", "7h8h9h"]),
        ("studhilo", "", &["As2d3c", "KhKsQd"]),
        ("razz", "", &["As2d3c", "KhKsQd"]),
    ];
    for (game, board, hands) in cases {
        let results = calculate(game, board, hands);
        assert_eq!(hands.len(), results.len(), "{game}");
        let counts: Vec<u32> = results.iter().map(|r| r.total().count).collect();
        assert!(counts.iter().all(|c| *c == counts[0] && *c > 0), "{game}");
        for r in &results {
            let t = r.total();
            assert_relative_eq!(t.count as f64, t.win + t.tie + t.lose, epsilon = 1e-9);
            assert!((0.0..=1.0).contains(&t.win_equity), "{game}");
            assert_eq!(GameVariant::from_name(game).unwrap().is_hi_lo(), r.is_hi_lo());
        }
    }
}

#[test]
fn flop_scenario() {
    let results = calculate("holdem", "AhKhQh", &["AcKc", "2d2s"]);
    assert!(results[0].high_summary.best);
    assert!(results[0].high_summary.current > results[1].high_summary.current);
    assert_eq!(
        Rank::TwoPair,
        results[0].high_summary.current.unwrap().rank()
    );
    assert!(results[0].exact);
    assert_eq!(990, results[0].high.count);
}

#[test]
fn hand_value_description_round_trip() {
    let v = results_value("AhKhQh7c2c", "AcKc");
    assert_eq!("Two Pair AK - Q", v.to_string());
    assert_eq!(Some(Rank::TwoPair), Rank::from_description(&v.to_string()));
    assert_eq!(v, HandValue::from_u32(v.to_u32()).unwrap());
}

fn results_value(board: &str, hand: &str) -> HandValue {
    calculate("holdem", board, &[hand])[0]
        .high_summary
        .current
        .unwrap()
}

#[cfg(feature = "serde")]
#[test]
fn results_serialize() {
    let results = calculate("omahahilo", "2h3h7dKs", &["As4cJs9c", "KdKcQdQc"]);
    let json = serde_json::to_string(&results).unwrap();
    let back: Vec<HiLoEquity> = serde_json::from_str(&json).unwrap();
    assert_eq!(results, back);
}
