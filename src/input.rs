//! Turning command-line text or an input file into a validated coin set and
//! target value.
//!
//! File format: the coin list on the first non-empty line, the target on the
//! second. Anything after that is ignored.
//!
//! ```text
//! 25,10,5,1
//! 41
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::cs::greedy::{Coin, CoinSet};
use crate::error::{Error, Result};

/// A coin set and target that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInput {
    pub coins: CoinSet,
    pub target: Coin,
}

impl ProblemInput {
    /// Rejects an empty coin set.
    pub fn new(coins: CoinSet, target: Coin) -> Result<Self> {
        if coins.is_empty() {
            return Err(Error::EmptyCoinSet);
        }
        Ok(Self { coins, target })
    }

    /// Parses a coin list such as `"25,10,5,1"` and a target such as `"41"`.
    pub fn parse(coins: &str, target: &str) -> Result<Self> {
        Self::new(parse_coin_list(coins)?, parse_target(target)?)
    }

    /// Accepts either `[coins, target]` or `[file]`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [path] => {
                let path: &str = path.as_ref();
                read_input_file(path)
            }
            [coins, target] => Self::parse(coins.as_ref(), target.as_ref()),
            _ => Err(Error::WrongArgumentCount(args.len())),
        }
    }
}

/// Parses a comma-separated coin list into a [`CoinSet`].
///
/// Whitespace anywhere is ignored, as are empty fields. An empty list gives
/// an empty set; [`ProblemInput::new`] is where that gets rejected.
///
/// # Examples
///
/// ```
/// use greedy_change::parse_coin_list;
///
/// let coins = parse_coin_list(" 1, 25,10,,5 ").unwrap();
/// assert_eq!(coins.denominations(), &[25, 10, 5, 1]);
/// assert!(parse_coin_list("25,ten").is_err());
/// ```
pub fn parse_coin_list(text: &str) -> Result<CoinSet> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let coins = cleaned
        .split(',')
        .filter(|token| !token.is_empty())
        .map(parse_coin)
        .collect::<Result<Vec<_>>>()?;
    CoinSet::new(coins)
}

fn parse_coin(token: &str) -> Result<Coin> {
    if is_negative_integer(token) {
        return Err(Error::NonPositiveDenomination(token.to_string()));
    }
    match token.parse::<Coin>() {
        Ok(0) => Err(Error::NonPositiveDenomination(token.to_string())),
        Ok(coin) => Ok(coin),
        Err(source) => Err(Error::InvalidCoin {
            token: token.to_string(),
            source,
        }),
    }
}

// Any length of digits, so values below i64::MIN still count as negative
fn is_negative_integer(token: &str) -> bool {
    token
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses a non-negative target value.
pub fn parse_target(text: &str) -> Result<Coin> {
    let token = text.trim();
    if is_negative_integer(token) && token.bytes().skip(1).any(|b| b != b'0') {
        return Err(Error::NegativeTarget(token.to_string()));
    }
    token.parse::<Coin>().map_err(|source| Error::InvalidTarget {
        token: token.to_string(),
        source,
    })
}

/// Reads the coin list and target from a file.
pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<ProblemInput> {
    let path = path.as_ref();
    debug!("reading input from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [coins, target, ..] => ProblemInput::parse(coins, target),
        _ => Err(Error::MalformedInputFile {
            path: path.to_path_buf(),
            found: lines.len(),
        }),
    }
}
