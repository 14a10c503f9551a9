use super::coin_set::{Coin, CoinSet};
use super::reduction::{ChangeStrategy, Outcome};

/// Always takes the largest denomination that still fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirst;

impl ChangeStrategy for LargestFirst {
    fn name(&self) -> &'static str {
        "largest-first"
    }

    fn next_coin(&self, coins: &CoinSet, remaining: Coin) -> Option<Coin> {
        // Denominations are stored largest first, so the first fit is the largest
        coins.fitting(remaining).next()
    }
}

/// Makes change for `target` by repeatedly taking the largest coin that fits.
///
/// This is the classic cashier's algorithm. It is optimal for canonical coin
/// systems such as `[25, 10, 5, 1]` but not in general, and it gives up with
/// [`Outcome::NoExactChange`] when the remaining amount is smaller than every
/// denomination.
///
/// # Examples
///
/// ```
/// use greedy_change::{largest_first, CoinSet};
///
/// let coins = CoinSet::new([25, 10, 5, 1]).unwrap();
/// let outcome = largest_first(&coins, 41);
/// assert_eq!(outcome.coins(), Some(&[25, 10, 5, 1][..]));
///
/// // [4, 3] cannot make 5 once a 4 is taken
/// let coins = CoinSet::new([4, 3]).unwrap();
/// assert_eq!(largest_first(&coins, 5).coin_count(), None);
/// ```
pub fn largest_first(coins: &CoinSet, target: Coin) -> Outcome {
    LargestFirst.make_change(coins, target)
}
