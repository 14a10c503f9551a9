use std::fmt;

use log::debug;

use super::coin_set::{Coin, CoinSet};
use super::kind::StrategyKind;
use super::reduction::Outcome;

/// Outcome of a single heuristic within a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyResult {
    pub kind: StrategyKind,
    pub outcome: Outcome,
}

impl fmt::Display for StrategyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Strategy {} ({}): {}",
            self.kind.number(),
            self.kind,
            self.outcome
        )
    }
}

/// The heuristics' results for one coin set and target, side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub coins: CoinSet,
    pub target: Coin,
    pub results: Vec<StrategyResult>,
}

impl RunReport {
    pub fn get(&self, kind: StrategyKind) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|result| result.kind == kind)
            .map(|result| &result.outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyResult> {
        self.results.iter()
    }

    /// The exact result using the fewest coins, the earliest one on ties.
    pub fn best(&self) -> Option<&StrategyResult> {
        self.results
            .iter()
            .filter_map(|result| result.outcome.coin_count().map(|n| (n, result)))
            .min_by_key(|&(n, _)| n)
            .map(|(_, result)| result)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coins: {}  |  V = {}", self.coins, self.target)?;
        for result in &self.results {
            write!(f, "\n{}", result)?;
        }
        Ok(())
    }
}

/// Runs every heuristic on the same coin set and target.
///
/// Each run is independent: one strategy getting stuck never affects the
/// others.
///
/// # Examples
///
/// ```
/// use greedy_change::{run_all, CoinSet, StrategyKind};
///
/// let coins = CoinSet::new([25, 10, 5, 1]).unwrap();
/// let report = run_all(&coins, 41);
/// assert_eq!(report.get(StrategyKind::LargestFirst).unwrap().coin_count(), Some(4));
/// ```
pub fn run_all(coins: &CoinSet, target: Coin) -> RunReport {
    run_selected(coins, target, &StrategyKind::ALL)
}

/// Runs only the given heuristics, in the given order.
pub fn run_selected(coins: &CoinSet, target: Coin, kinds: &[StrategyKind]) -> RunReport {
    debug!("running {} strategies for V = {}", kinds.len(), target);
    let results = kinds
        .iter()
        .map(|&kind| StrategyResult {
            kind,
            outcome: kind.strategy().make_change(coins, target),
        })
        .collect();

    RunReport {
        coins: coins.clone(),
        target,
        results,
    }
}

/// Same as [`run_all`], with the three heuristics computed in parallel.
#[cfg(feature = "parallel")]
pub fn run_all_parallel(coins: &CoinSet, target: Coin) -> RunReport {
    use rayon::prelude::*;

    debug!("running all strategies in parallel for V = {}", target);
    let results = StrategyKind::ALL
        .par_iter()
        .map(|&kind| StrategyResult {
            kind,
            outcome: kind.strategy().make_change(coins, target),
        })
        .collect();

    RunReport {
        coins: coins.clone(),
        target,
        results,
    }
}
