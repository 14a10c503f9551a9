pub mod closest_to_half;
pub mod coin_set;
pub mod kind;
pub mod largest_first;
pub mod max_remainder;
pub mod reduction;
pub mod remainder_quality;
pub mod run_all;

// Re-export greedy change-making heuristics with descriptive names
pub use closest_to_half::{closest_to_half, ClosestToHalf};
pub use coin_set::{Coin, CoinSet};
pub use kind::{StrategyKind, UnknownStrategy};
pub use largest_first::{largest_first, LargestFirst};
pub use max_remainder::{max_remainder, MaxRemainder};
pub use reduction::{reduce, ChangeStrategy, Outcome};
pub use remainder_quality::remainder_quality;
#[cfg(feature = "parallel")]
pub use run_all::run_all_parallel;
pub use run_all::{run_all, run_selected, RunReport, StrategyResult};
