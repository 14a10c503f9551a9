use std::cmp::Reverse;

use super::coin_set::{Coin, CoinSet};
use super::reduction::{ChangeStrategy, Outcome};
use super::remainder_quality::remainder_quality;

/// Takes the coin whose leftover is divisible by the largest denomination.
///
/// Ties on quality go to the smaller leftover, then to the larger coin.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRemainder;

impl ChangeStrategy for MaxRemainder {
    fn name(&self) -> &'static str {
        "max-remainder"
    }

    fn next_coin(&self, coins: &CoinSet, remaining: Coin) -> Option<Coin> {
        coins.fitting(remaining).max_by_key(|&c| {
            let rest = remaining - c;
            (
                remainder_quality(coins.denominations(), rest),
                Reverse(rest),
                c,
            )
        })
    }
}

/// Makes change for `target` by looking one step ahead: each pick is the coin
/// that leaves a remainder evenly divisible by the largest possible
/// denomination, so the following steps can use big coins cleanly.
///
/// This is not guaranteed to beat [`largest_first`](crate::largest_first()).
///
/// # Examples
///
/// ```
/// use greedy_change::{max_remainder, CoinSet};
///
/// let coins = CoinSet::new([25, 10, 5, 1]).unwrap();
/// // 41 - 1 = 40 is divisible by 10, every other leftover only by 1
/// assert_eq!(max_remainder(&coins, 41).coins(), Some(&[1, 10, 5, 25][..]));
/// ```
pub fn max_remainder(coins: &CoinSet, target: Coin) -> Outcome {
    MaxRemainder.make_change(coins, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(values: &[Coin]) -> CoinSet {
        CoinSet::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn test_higher_quality_wins() {
        // Taking 6 leaves 4 (quality 4), taking 4 leaves 6 (quality 6)
        assert_eq!(MaxRemainder.next_coin(&coins(&[6, 4]), 10), Some(4));
        assert_eq!(
            max_remainder(&coins(&[6, 4]), 10),
            Outcome::Change(vec![4, 6])
        );
    }

    #[test]
    fn test_quality_tie_prefers_smaller_leftover() {
        // 9 leaves 4 and 7 leaves 6, both only divisible by 2
        assert_eq!(MaxRemainder.next_coin(&coins(&[9, 7, 2]), 13), Some(9));
        assert_eq!(
            max_remainder(&coins(&[9, 7, 2]), 13),
            Outcome::Change(vec![9, 2, 2])
        );
    }

    #[test]
    fn test_zero_quality_tie_prefers_smaller_leftover() {
        // 5 leaves 1 and 4 leaves 2, neither divisible by anything
        assert_eq!(MaxRemainder.next_coin(&coins(&[4, 5]), 6), Some(5));
    }

    #[test]
    fn test_exact_fit_scores_largest() {
        // A leftover of zero scores the largest denomination
        assert_eq!(MaxRemainder.next_coin(&coins(&[25, 10, 5, 1]), 25), Some(25));
    }

    #[test]
    fn test_us_coins() {
        let outcome = max_remainder(&coins(&[25, 10, 5, 1]), 41);
        assert_eq!(outcome, Outcome::Change(vec![1, 10, 5, 25]));
        assert_eq!(outcome.coin_count(), Some(4));
    }

    #[test]
    fn test_no_exact_change() {
        let outcome = max_remainder(&coins(&[4, 3]), 5);
        assert_eq!(
            outcome,
            Outcome::NoExactChange {
                remaining: 1,
                picked: vec![4]
            }
        );
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(max_remainder(&coins(&[10, 1]), 0), Outcome::Change(vec![]));
    }
}
