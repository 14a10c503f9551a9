use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Input validation failures.
///
/// Failing to make exact change is not an error: strategies report it through
/// [`Outcome::NoExactChange`](crate::cs::greedy::Outcome::NoExactChange).
#[derive(Debug, Error)]
pub enum Error {
    #[error("coin set is empty (example: 25,10,5,1)")]
    EmptyCoinSet,

    #[error("denominations must be positive, got {0}")]
    NonPositiveDenomination(String),

    #[error("invalid coin `{token}`: {source}")]
    InvalidCoin {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid target value `{token}`: {source}")]
    InvalidTarget {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("target value must be non-negative, got {0}")]
    NegativeTarget(String),

    #[error(
        "input file {} needs at least 2 non-empty lines (coins on line 1, target on line 2), found {found}",
        path.display()
    )]
    MalformedInputFile { path: PathBuf, found: usize },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("expected a coin list and a target, or a single input file, got {0} arguments")]
    WrongArgumentCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            Error::NegativeTarget("-3".to_string()).to_string(),
            "target value must be non-negative, got -3"
        );
        assert_eq!(
            Error::NonPositiveDenomination("0".to_string()).to_string(),
            "denominations must be positive, got 0"
        );

        let err = Error::MalformedInputFile {
            path: PathBuf::from("coins.txt"),
            found: 1,
        };
        assert!(err.to_string().starts_with("input file coins.txt needs"));
    }

    #[test]
    fn test_parse_failures_keep_their_source() {
        use std::error::Error as _;

        let source = "x".parse::<u64>().unwrap_err();
        let err = Error::InvalidCoin {
            token: "x".to_string(),
            source,
        };
        assert!(err.source().is_some());
    }
}
