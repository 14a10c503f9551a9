use std::cmp::Reverse;

use super::coin_set::{Coin, CoinSet};
use super::reduction::{ChangeStrategy, Outcome};

/// Takes the fitting denomination closest to half of the remaining amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestToHalf;

impl ChangeStrategy for ClosestToHalf {
    fn name(&self) -> &'static str {
        "closest-to-half"
    }

    fn next_coin(&self, coins: &CoinSet, remaining: Coin) -> Option<Coin> {
        // |c - (r - c)| is twice the distance from c to r / 2, with no rounding
        coins
            .fitting(remaining)
            .min_by_key(|&c| (c.abs_diff(remaining - c), Reverse(c)))
    }
}

/// Makes change for `target` by always taking the coin closest to half of what
/// is left, preferring the larger coin when two are equally close.
///
/// # Examples
///
/// ```
/// use greedy_change::{closest_to_half, CoinSet};
///
/// // 7 and 3 are both 2 away from 5.0; the larger one wins
/// let coins = CoinSet::new([7, 3]).unwrap();
/// assert_eq!(closest_to_half(&coins, 10).coins(), Some(&[7, 3][..]));
/// ```
pub fn closest_to_half(coins: &CoinSet, target: Coin) -> Outcome {
    ClosestToHalf.make_change(coins, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(values: &[Coin]) -> CoinSet {
        CoinSet::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn test_tie_prefers_larger_coin() {
        assert_eq!(ClosestToHalf.next_coin(&coins(&[7, 3]), 10), Some(7));
        assert_eq!(ClosestToHalf.next_coin(&coins(&[3, 7]), 10), Some(7));
    }

    #[test]
    fn test_picks_closest_to_half() {
        // Half of 41 is 20.5: 25 is 4.5 away, 10 is 10.5 away
        assert_eq!(ClosestToHalf.next_coin(&coins(&[25, 10, 5, 1]), 41), Some(25));
        // Half of 16 is 8: 10 is 2 away, 5 is 3 away
        assert_eq!(ClosestToHalf.next_coin(&coins(&[25, 10, 5, 1]), 16), Some(10));
    }

    #[test]
    fn test_us_coins() {
        // 41 -> 25 (16 left) -> 10 (6 left) -> 5 (1 left) -> 1
        let outcome = closest_to_half(&coins(&[25, 10, 5, 1]), 41);
        assert_eq!(outcome, Outcome::Change(vec![25, 10, 5, 1]));
    }

    #[test]
    fn test_can_be_worse_than_largest_first() {
        // Half of 20 is 10, so 10 beats 20; then 1 (4 away from 5) beats 10 (5 away)
        let outcome = closest_to_half(&coins(&[20, 10, 1]), 20);
        let mut expected = vec![10];
        expected.extend([1; 10]);
        assert_eq!(outcome, Outcome::Change(expected));
    }

    #[test]
    fn test_remaining_one() {
        assert_eq!(ClosestToHalf.next_coin(&coins(&[5, 1]), 1), Some(1));
    }

    #[test]
    fn test_no_exact_change() {
        let outcome = closest_to_half(&coins(&[4, 3]), 5);
        assert_eq!(outcome.coin_count(), None);
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(closest_to_half(&coins(&[10, 1]), 0), Outcome::Change(vec![]));
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let big = Coin::MAX;
        let set = coins(&[big, big / 2 + 1, 1]);
        assert_eq!(ClosestToHalf.next_coin(&set, big), Some(big / 2 + 1));
    }
}
