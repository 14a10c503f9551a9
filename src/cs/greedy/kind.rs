use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::closest_to_half::ClosestToHalf;
use super::largest_first::LargestFirst;
use super::max_remainder::MaxRemainder;
use super::reduction::ChangeStrategy;

/// The available heuristics, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    LargestFirst,
    ClosestToHalf,
    MaxRemainder,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::LargestFirst,
        StrategyKind::ClosestToHalf,
        StrategyKind::MaxRemainder,
    ];

    pub fn strategy(self) -> &'static dyn ChangeStrategy {
        match self {
            StrategyKind::LargestFirst => &LargestFirst,
            StrategyKind::ClosestToHalf => &ClosestToHalf,
            StrategyKind::MaxRemainder => &MaxRemainder,
        }
    }

    pub fn name(self) -> &'static str {
        self.strategy().name()
    }

    /// 1-based position in the report.
    pub fn number(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that matches none of [`StrategyKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected one of: {names})", names = known_names())]
pub struct UnknownStrategy(pub String);

fn known_names() -> String {
    let names: Vec<_> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
    names.join(", ")
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<_> = StrategyKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["largest-first", "closest-to-half", "max-remainder"]);
    }

    #[test]
    fn test_numbers_follow_report_order() {
        assert_eq!(StrategyKind::LargestFirst.number(), 1);
        assert_eq!(StrategyKind::ClosestToHalf.number(), 2);
        assert_eq!(StrategyKind::MaxRemainder.number(), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "closest-to-half".parse::<StrategyKind>(),
            Ok(StrategyKind::ClosestToHalf)
        );
        assert_eq!(
            " Max-Remainder ".parse::<StrategyKind>(),
            Ok(StrategyKind::MaxRemainder)
        );

        let err = "smallest-first".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err, UnknownStrategy("smallest-first".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown strategy `smallest-first` (expected one of: largest-first, closest-to-half, max-remainder)"
        );
    }

    #[test]
    fn test_unknown_strategy_is_a_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(UnknownStrategy("x".into()));
        assert!(err.source().is_none());
        assert!(err.to_string().starts_with("unknown strategy `x`"));
    }
}
