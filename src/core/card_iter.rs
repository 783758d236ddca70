use super::Card;

/// Step `idx` (strictly increasing indices into a pool of `n`) to the next
/// combination in lexicographic order. Returns false once every
/// combination has been produced, leaving `idx` untouched.
///
/// ```
/// use hilo_equity::core::next_combination;
///
/// let mut idx = [0, 1];
/// let mut seen = vec![idx];
/// while next_combination(&mut idx, 4) {
///     seen.push(idx);
/// }
/// assert_eq!(vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]], seen);
/// ```
pub fn next_combination(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    if k > n {
        return false;
    }
    // Find the right most index that can still move forward.
    let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
        return false;
    };
    idx[i] += 1;
    for j in i + 1..k {
        idx[j] = idx[j - 1] + 1;
    }
    true
}

/// Iterate every `num_cards` sized subset of `possible_cards`, in a stable
/// nested order, each exactly once.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],
    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,
    // Has the first combination been handed out yet.
    started: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            started: false,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.idx.len() > self.possible_cards.len() {
            return None;
        }
        if self.started {
            if !next_combination(&mut self.idx, self.possible_cards.len()) {
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}

/// Binomial coefficient, n pick k. Zero when k > n and `u64::MAX` when
/// the result doesn't fit.
///
/// ```
/// use hilo_equity::core::binomial;
///
/// assert_eq!(2_598_960, binomial(52, 5));
/// assert_eq!(990, binomial(45, 2));
/// assert_eq!(0, binomial(3, 4));
/// assert_eq!(u64::MAX, binomial(100, 50));
/// ```
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=u128::from(k) {
        // Each partial product is itself a binomial so the division is
        // exact. They only grow while i <= n / 2 so once one is too big the
        // result is too.
        acc = match acc.checked_mul(u128::from(n) + 1 - i) {
            Some(p) => p / i,
            None => return u64::MAX,
        };
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// The `n`th (zero based) combination of `k` indices out of `0..pool` in
/// colexicographic order, smallest index first. This unranks a combination
/// without walking all the ones before it. `None` when `n` is not below
/// `binomial(pool, k)`.
///
/// ```
/// use hilo_equity::core::nth_combination;
///
/// assert_eq!(Some(vec![0, 1]), nth_combination(4, 2, 0));
/// assert_eq!(Some(vec![0, 2]), nth_combination(4, 2, 1));
/// assert_eq!(Some(vec![1, 2]), nth_combination(4, 2, 2));
/// assert_eq!(Some(vec![0, 3]), nth_combination(4, 2, 3));
/// assert_eq!(None, nth_combination(4, 2, 6));
/// ```
pub fn nth_combination(pool: usize, k: usize, mut n: u64) -> Option<Vec<usize>> {
    if k > pool || n >= binomial(pool as u64, k as u64) {
        return None;
    }
    let mut result = vec![0; k];
    let mut limit = pool;
    for slot in (1..=k).rev() {
        // Largest c below limit with binomial(c, slot) <= n.
        let mut c = slot - 1;
        while c + 1 < limit && binomial(c as u64 + 1, slot as u64) <= n {
            c += 1;
        }
        n -= binomial(c as u64, slot as u64);
        result[slot - 1] = c;
        limit = c;
    }
    Some(result)
}
