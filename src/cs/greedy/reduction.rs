use std::fmt;

use log::{debug, trace};

use super::coin_set::{Coin, CoinSet};

/// Result of one greedy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The picked coins, in pick order. They sum to the target exactly.
    Change(Vec<Coin>),
    /// No denomination fit the remaining amount before it reached zero.
    NoExactChange { remaining: Coin, picked: Vec<Coin> },
}

impl Outcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, Outcome::Change(_))
    }

    /// Number of coins used, `None` when no exact change was found.
    pub fn coin_count(&self) -> Option<usize> {
        self.coins().map(<[Coin]>::len)
    }

    pub fn coins(&self) -> Option<&[Coin]> {
        match self {
            Outcome::Change(coins) => Some(coins.as_slice()),
            Outcome::NoExactChange { .. } => None,
        }
    }

    pub fn into_coins(self) -> Option<Vec<Coin>> {
        match self {
            Outcome::Change(coins) => Some(coins),
            Outcome::NoExactChange { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Change(coins) => write!(f, "{} coins -> {:?}", coins.len(), coins),
            Outcome::NoExactChange { .. } => write!(f, "no exact change"),
        }
    }
}

/// A greedy change-making heuristic.
///
/// Implementors only decide which coin to take next; the shared reduction
/// loop in [`reduce`] does the rest.
pub trait ChangeStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Picks the next coin for `remaining`, or `None` when nothing fits.
    ///
    /// `remaining` is always positive. A returned coin must be a member of
    /// `coins` and not larger than `remaining`.
    fn next_coin(&self, coins: &CoinSet, remaining: Coin) -> Option<Coin>;

    fn make_change(&self, coins: &CoinSet, target: Coin) -> Outcome {
        debug!("{}: making change for {} from {}", self.name(), target, coins);
        let outcome = reduce(coins, target, |coins, remaining| {
            self.next_coin(coins, remaining)
        });
        debug!("{}: {}", self.name(), outcome);
        outcome
    }
}

/// Repeatedly subtracts the coin picked by `choose` until nothing remains.
///
/// Stops with [`Outcome::NoExactChange`] as soon as `choose` finds nothing.
/// A choice of zero or one larger than the remaining amount counts as nothing,
/// so the remaining amount strictly decreases and never goes negative.
///
/// # Examples
///
/// ```
/// use greedy_change::{greedy::reduce, CoinSet, Outcome};
///
/// let coins = CoinSet::new([5, 2]).unwrap();
/// // Always take the smallest coin that fits
/// let outcome = reduce(&coins, 6, |coins, remaining| coins.fitting(remaining).last());
/// assert_eq!(outcome, Outcome::Change(vec![2, 2, 2]));
/// ```
pub fn reduce<F>(coins: &CoinSet, target: Coin, mut choose: F) -> Outcome
where
    F: FnMut(&CoinSet, Coin) -> Option<Coin>,
{
    let mut remaining = target;
    let mut picked = Vec::new();

    while remaining > 0 {
        match choose(coins, remaining) {
            Some(coin) if coin > 0 && coin <= remaining => {
                remaining -= coin;
                picked.push(coin);
                trace!("picked {}, {} remaining", coin, remaining);
            }
            _ => return Outcome::NoExactChange { remaining, picked },
        }
    }

    Outcome::Change(picked)
}
