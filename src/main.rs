use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sort_trace::{
    AlgorithmKind,
    BogoConfig,
    EngineConfig,
    ExecutionResult,
    GeneratorPolicy,
    HistoryEvent,
    HistorySink,
    MemoryHistory,
    SequenceGenerator,
    SortExecutionService,
    generator::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sort_trace", version, about = "Instrumented sorting algorithm runner")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one algorithm and print its metrics
    Run {
        algorithm: String,
        #[command(flatten)]
        input: InputArgs,
        /// Print every recorded step
        #[arg(long)]
        steps: bool,
    },
    /// Run several algorithms side by side on the same input
    Compare {
        /// Comma separated algorithm names
        #[arg(value_delimiter = ',')]
        algorithms: Vec<String>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List supported algorithms
    List,
}

#[derive(Args)]
struct InputArgs {
    /// Explicit input, e.g. --values 5,3,8,1
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i32>>,
    #[arg(long, default_value_t = 16)]
    size: usize,
    #[arg(long, default_value = "random")]
    policy: String,
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    min: i32,
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, allow_hyphen_values = true)]
    max: i32,
    /// Seed for input generation and bogo shuffles
    #[arg(long)]
    seed: Option<u64>,
    /// Cap on intermediate snapshots
    #[arg(long)]
    max_snapshots: Option<usize>,
    #[arg(long)]
    json: bool,
}

impl InputArgs {
    fn sequence(&self) -> Result<Vec<i32>> {
        if let Some(values) = &self.values {
            return Ok(values.clone());
        }
        let policy: GeneratorPolicy = self.policy.parse()?;
        let values = SequenceGenerator::new(self.seed)
            .generate(policy, self.size, self.min..=self.max)
            .context("failed to generate input")?;
        Ok(values)
    }

    fn config(&self) -> EngineConfig {
        let mut bogo = BogoConfig::default();
        if let Some(seed) = self.seed {
            bogo = bogo.with_seed(seed);
        }
        let config = EngineConfig::new().with_bogo(bogo);
        match self.max_snapshots {
            Some(limit) => config.with_max_snapshots(limit),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let history = MemoryHistory::new();
    match cli.command {
        Commands::Run { algorithm, input, steps } => {
            let kind = AlgorithmKind::from_name(&algorithm)?;
            let sequence = input.sequence()?;
            let service = SortExecutionService::with_config(input.config());
            let result = service.execute(kind, &sequence);
            history.record(HistoryEvent::executed(&result));
            if input.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&sequence, &result, steps);
            }
        }
        Commands::Compare { algorithms, input } => {
            let kinds = algorithms
                .iter()
                .map(|name| AlgorithmKind::from_name(name))
                .collect::<Result<Vec<_>, _>>()?;
            let sequence = input.sequence()?;
            let service = SortExecutionService::with_config(input.config());
            let results = service.compare(&kinds, &sequence);
            for result in &results {
                history.record(HistoryEvent::executed(result));
            }
            if input.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("== Input: {sequence:?} ==\n");
                print_comparison(&results);
            }
        }
        Commands::List => {
            for kind in AlgorithmKind::ALL {
                println!(
                    "{:<10} {:<22} time {:<32} space {}",
                    kind.id(),
                    kind.display_name(),
                    kind.time_complexity(),
                    kind.space_complexity()
                );
            }
        }
    }
    info!(events = history.len(), "session finished");
    Ok(())
}

fn print_result(input: &[i32], result: &ExecutionResult, steps: bool) {
    let metrics = &result.metrics;
    println!("== {} ==", metrics.algorithm);
    println!("Input:       {input:?}");
    println!("Sorted:      {:?}", result.final_array);
    println!("Comparisons: {}", metrics.comparison_count);
    println!("Swaps:       {}", metrics.swap_count);
    println!("Time:        {:.3} ms", metrics.execution_time_millis());
    println!("Complexity:  time {}, space {}", metrics.time_complexity, metrics.space_complexity);
    println!("Steps:       {}", result.steps.len());
    if steps {
        println!();
        for (i, step) in result.steps.iter().enumerate() {
            println!(
                "{i:>5}  {:<40} {:?} {:?}",
                step.description,
                step.array_state,
                step.highlighted.as_slice()
            );
        }
    }
}

fn print_comparison(results: &[ExecutionResult]) {
    println!(
        "{:<22} {:>12} {:>12} {:>10} {:>12}",
        "Algorithm", "Comparisons", "Swaps", "Steps", "Time (ms)"
    );
    for result in results {
        let metrics = &result.metrics;
        println!(
            "{:<22} {:>12} {:>12} {:>10} {:>12.3}",
            metrics.algorithm.display_name(),
            metrics.comparison_count,
            metrics.swap_count,
            result.steps.len(),
            metrics.execution_time_millis()
        );
    }
}
