#![no_main]

use hilo_equity::core::{
    Card, CardBitSet, HandValue, Rank, ace_five_low_value, ace_five_low8_value,
    deuce_seven_low_value, high_value,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|cards: [Card; 5]| {
    // Only unique cards make a hand.
    if CardBitSet::try_from_groups(&[&cards]).is_err() {
        assert!(high_value(&cards).is_err());
        return;
    }

    let high = high_value(&cards).unwrap();
    assert_eq!(high, HandValue::from_u32(high.to_u32()).unwrap());
    assert_eq!(Some(high.rank()), Rank::from_description(&high.to_string()));

    let low = ace_five_low_value(&cards).unwrap();
    match ace_five_low8_value(&cards).unwrap() {
        Some(low8) => {
            assert_eq!(low, low8);
            assert_eq!(Rank::HighCard, low8.rank());
            assert!(low8.kickers()[0] <= 8);
        }
        None => assert!(low.rank() != Rank::HighCard || low.kickers()[0] > 8),
    }

    let ds = deuce_seven_low_value(&cards).unwrap();
    assert!(ds.valuation().is_low());
});
