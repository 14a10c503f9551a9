use std::process::ExitCode;

use clap::Parser;
use greedy_change::{run_selected, ProblemInput, StrategyKind};

/// Compare greedy change-making heuristics on one coin set and target
#[derive(Parser, Debug)]
#[command(name = "change_maker", version)]
#[command(after_help = "Examples:\n  change_maker 25,10,5,1 41\n  change_maker input.txt")]
struct Cli {
    /// Comma-separated coin list, or a file with the coins on line 1 and the target on line 2
    input: String,

    /// Target value to make change for (omit when INPUT is a file)
    #[arg(allow_negative_numbers = true)]
    target: Option<String>,

    /// Run only this heuristic (repeatable)
    #[arg(short, long = "strategy", value_name = "NAME")]
    strategies: Vec<StrategyKind>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let args: Vec<&str> = std::iter::once(cli.input.as_str())
        .chain(cli.target.as_deref())
        .collect();

    let input = match ProblemInput::from_args(&args) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let kinds = if cli.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        cli.strategies
    };

    let report = run_selected(&input.coins, input.target, &kinds);
    println!("{report}");
    if report.results.len() > 1 {
        if let Some(best) = report.best() {
            println!(
                "Fewest coins: strategy {} ({})",
                best.kind.number(),
                best.kind
            );
        }
    }
    ExitCode::SUCCESS
}
