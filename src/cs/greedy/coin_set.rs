use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single denomination.
pub type Coin = u64;

/// Immutable set of denominations, kept sorted from largest to smallest.
///
/// Duplicates are allowed and behave as repeated candidates. Zero is rejected:
/// every pick must shrink the remaining amount, otherwise the greedy loops
/// would never terminate.
///
/// # Examples
///
/// ```
/// use greedy_change::CoinSet;
///
/// let coins = CoinSet::new([1, 25, 5, 10]).unwrap();
/// assert_eq!(coins.denominations(), &[25, 10, 5, 1]);
/// assert_eq!(coins.to_string(), "[25, 10, 5, 1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CoinSet {
    denominations: Vec<Coin>,
}

impl CoinSet {
    pub fn new<I>(denominations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coin>,
    {
        let mut denominations: Vec<Coin> = denominations.into_iter().collect();
        if denominations.contains(&0) {
            return Err(Error::NonPositiveDenomination("0".to_string()));
        }
        denominations.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { denominations })
    }

    /// Denominations in descending order.
    pub fn denominations(&self) -> &[Coin] {
        &self.denominations
    }

    pub fn iter(&self) -> impl Iterator<Item = Coin> + '_ {
        self.denominations.iter().copied()
    }

    /// Denominations not larger than `amount`, largest first.
    pub fn fitting(&self, amount: Coin) -> impl Iterator<Item = Coin> + '_ {
        self.iter().filter(move |&c| c <= amount)
    }

    pub fn largest(&self) -> Option<Coin> {
        self.denominations.first().copied()
    }

    pub fn smallest(&self) -> Option<Coin> {
        self.denominations.last().copied()
    }

    pub fn contains(&self, denomination: Coin) -> bool {
        self.denominations.contains(&denomination)
    }

    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }
}

impl<'a> IntoIterator for &'a CoinSet {
    type Item = Coin;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Coin>>;

    fn into_iter(self) -> Self::IntoIter {
        self.denominations.iter().copied()
    }
}

impl FromStr for CoinSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::input::parse_coin_list(s)
    }
}

impl fmt::Display for CoinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.denominations)
    }
}
