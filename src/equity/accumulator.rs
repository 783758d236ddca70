use crate::core::{Card, HandValue, Rank};

/// Win and tie counts over a number of completed deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equity {
    pub count: u32,
    pub win: u32,
    pub tie: u32,
}

impl Equity {
    pub fn lose(&self) -> u32 {
        self.count - self.win - self.tie
    }

    /// Fraction of deals won outright.
    pub fn win_fraction(&self) -> f64 {
        fraction(self.win, self.count)
    }

    /// Fraction of deals tied.
    pub fn tie_fraction(&self) -> f64 {
        fraction(self.tie, self.count)
    }

    pub(crate) fn record(&mut self, won: bool, tied: bool) {
        self.count += 1;
        if won {
            self.win += 1;
        } else if tied {
            self.tie += 1;
        }
    }
}

fn fraction(n: u32, d: u32) -> f64 {
    if d == 0 { 0.0 } else { f64::from(n) / f64::from(d) }
}

/// What is known about one player's hand for one valuation (the high or
/// the low side of the pot).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueSummary {
    /// Value with the cards seen so far, `None` if there aren't enough
    /// cards or no low qualifies.
    pub current: Option<HandValue>,
    /// Is `current` the best (or tied best) of all the players.
    pub best: bool,
    /// Cards that would make this player best or tied best if dealt next.
    pub outs: Vec<Card>,
    /// How many deals were won or tied with each category of hand, indexed
    /// by `Rank as usize`. Only filled in for the high side.
    pub win_ranks: [u32; 9],
}

impl ValueSummary {
    pub(crate) fn record_win_rank(&mut self, rank: Rank) {
        self.win_ranks[rank as usize] += 1;
    }

    /// Iterate the categories that won at least once with their counts.
    pub fn winning_ranks(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        Rank::ranks()
            .into_iter()
            .zip(self.win_ranks.iter().copied())
            .filter(|(_, n)| *n > 0)
    }
}

/// The parts of a result that only exist for split pot games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitEquity {
    /// High results over the deals where a low qualified.
    pub high_half: Equity,
    /// Low results over the deals where a low qualified.
    pub low_half: Equity,
    pub low_summary: ValueSummary,
}

/// The full result for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiLoEquity {
    pub hand: Vec<Card>,
    /// High results. For split games only the deals where nobody
    /// qualified for low.
    pub high: Equity,
    pub high_summary: ValueSummary,
    /// `Some` only for games with a low half.
    pub split: Option<SplitEquity>,
    /// Every completion was enumerated rather than sampled.
    pub exact: bool,
    /// Cards left in the unknown pool.
    pub remaining: usize,
}

/// Blended totals of a [`HiLoEquity`]. Counts may be fractional since a
/// split pot counts half for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityTotal {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
    /// Number of completed deals.
    pub count: u32,
    /// Share of the pot won outright, 0 to 1.
    pub win_equity: f64,
    /// Share of the pot tied for, 0 to 1.
    pub tie_equity: f64,
}

impl EquityTotal {
    /// Win equity plus half the tie equity.
    pub fn equity(&self) -> f64 {
        self.win_equity + self.tie_equity / 2.0
    }
}

impl HiLoEquity {
    pub(crate) fn new(hand: Vec<Card>, hi_lo: bool, exact: bool, remaining: usize) -> Self {
        Self {
            hand,
            high: Equity::default(),
            high_summary: ValueSummary::default(),
            split: hi_lo.then(SplitEquity::default),
            exact,
            remaining,
        }
    }

    pub fn is_hi_lo(&self) -> bool {
        self.split.is_some()
    }

    pub fn low_summary(&self) -> Option<&ValueSummary> {
        self.split.as_ref().map(|s| &s.low_summary)
    }

    /// Combine the high only deals with the split deals. The split deals
    /// are weighted by how often they happened and each half counts for
    /// half the pot.
    pub fn total(&self) -> EquityTotal {
        let h = &self.high;
        let Some(split) = &self.split else {
            return EquityTotal {
                win: f64::from(h.win),
                tie: f64::from(h.tie),
                lose: f64::from(h.lose()),
                count: h.count,
                win_equity: h.win_fraction(),
                tie_equity: h.tie_fraction(),
            };
        };
        let hh = &split.high_half;
        let lh = &split.low_half;

        let count = h.count + hh.count;
        if count == 0 {
            return EquityTotal::default();
        }
        let high_weight = f64::from(h.count) / f64::from(count);
        let half = |a: u32, b: u32| (f64::from(a) + f64::from(b)) / 2.0;

        let mut win_equity = 0.0;
        let mut tie_equity = 0.0;
        if h.count > 0 {
            win_equity += high_weight * h.win_fraction();
            tie_equity += high_weight * h.tie_fraction();
        }
        if hh.count > 0 {
            let split_weight = 1.0 - high_weight;
            win_equity += split_weight * (hh.win_fraction() + lh.win_fraction()) / 2.0;
            tie_equity += split_weight * (hh.tie_fraction() + lh.tie_fraction()) / 2.0;
        }

        EquityTotal {
            win: f64::from(h.win) + half(hh.win, lh.win),
            tie: f64::from(h.tie) + half(hh.tie, lh.tie),
            lose: f64::from(h.lose()) + half(hh.lose(), lh.lose()),
            count,
            win_equity,
            tie_equity,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn equity(count: u32, win: u32, tie: u32) -> Equity {
        Equity { count, win, tie }
    }

    #[test]
    fn test_lose() {
        let e = equity(10, 3, 2);
        assert_eq!(5, e.lose());
        assert_relative_eq!(0.3, e.win_fraction());
        assert_relative_eq!(0.2, e.tie_fraction());
        assert_eq!(0.0, Equity::default().win_fraction());
    }

    #[test]
    fn test_record() {
        let mut e = Equity::default();
        e.record(true, false);
        e.record(false, true);
        e.record(false, false);
        assert_eq!(equity(3, 1, 1), e);
    }

    #[test]
    fn test_high_only_total() {
        let mut r = HiLoEquity::new(vec![], false, true, 45);
        r.high = equity(4, 2, 1);
        let t = r.total();
        assert_eq!(4, t.count);
        assert_relative_eq!(2.0, t.win);
        assert_relative_eq!(1.0, t.tie);
        assert_relative_eq!(1.0, t.lose);
        assert_relative_eq!(0.5, t.win_equity);
        assert_relative_eq!(0.25, t.tie_equity);
        assert_relative_eq!(0.625, t.equity());
    }

    #[test]
    fn test_split_total() {
        let mut r = HiLoEquity::new(vec![], true, true, 45);
        assert!(r.is_hi_lo());
        // Ten high only deals, all won.
        r.high = equity(10, 10, 0);
        // Ten split deals, high always lost, low always won.
        let split = r.split.as_mut().unwrap();
        split.high_half = equity(10, 0, 0);
        split.low_half = equity(10, 10, 0);

        let t = r.total();
        assert_eq!(20, t.count);
        assert_relative_eq!(15.0, t.win);
        assert_relative_eq!(0.0, t.tie);
        assert_relative_eq!(5.0, t.lose);
        assert_relative_eq!(0.75, t.win_equity);
        assert_relative_eq!(0.0, t.tie_equity);
    }

    #[test]
    fn test_split_total_all_split() {
        let mut r = HiLoEquity::new(vec![], true, false, 40);
        let split = r.split.as_mut().unwrap();
        split.high_half = equity(8, 8, 0);
        split.low_half = equity(8, 0, 4);

        let t = r.total();
        assert_eq!(8, t.count);
        assert_relative_eq!(0.5, t.win_equity);
        assert_relative_eq!(0.25, t.tie_equity);
        assert_relative_eq!(4.0, t.win);
        assert_relative_eq!(2.0, t.tie);
        assert_relative_eq!(2.0, t.lose);
    }

    #[test]
    fn test_empty_total() {
        let r = HiLoEquity::new(vec![], true, false, 0);
        assert_eq!(EquityTotal::default(), r.total());
    }

    #[test]
    fn test_winning_ranks() {
        let mut s = ValueSummary::default();
        s.record_win_rank(Rank::Flush);
        s.record_win_rank(Rank::Flush);
        s.record_win_rank(Rank::OnePair);
        assert_eq!(
            vec![(Rank::OnePair, 1), (Rank::Flush, 2)],
            s.winning_ranks().collect::<Vec<_>>()
        );
    }
}
