pub mod cs;
pub mod error;
pub mod input;

pub use cs::greedy;
pub use cs::greedy::{
    closest_to_half, largest_first, max_remainder, remainder_quality, run_all, run_selected,
    ChangeStrategy, Coin, CoinSet, Outcome, RunReport, StrategyKind, StrategyResult,
};
pub use error::{Error, Result};
pub use input::{parse_coin_list, parse_target, read_input_file, ProblemInput};
