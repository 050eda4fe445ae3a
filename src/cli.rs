use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twentyfour::{AnswerChecker, ExpressionSolver, Puzzle, PuzzleGenerator};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - deal, solve and check 24-point puzzles
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Combine four numbers with + - * / to make 24")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal four distinct numbers in 1..=13 that can make 24
    Generate {
        /// Seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,

        /// Also print one solution
        #[arg(long)]
        reveal: bool,
    },
    /// Find an expression over four numbers that makes 24
    Solve {
        /// The four numbers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Check that an expression evaluates to 24
    Check {
        /// Arithmetic expression, e.g. "(8 - 4) * (7 - 1)"
        expression: String,

        /// Puzzle numbers the expression must use, each exactly once
        #[arg(long, num_args = 4)]
        numbers: Option<Vec<i64>>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Generate { seed, reveal } => generate(seed, reveal),
        Command::Solve { numbers } => solve(&numbers),
        Command::Check {
            expression,
            numbers,
        } => check(&expression, numbers.as_deref()),
    }
}

fn generate(seed: Option<u64>, reveal: bool) -> Result<()> {
    let generator = PuzzleGenerator::new();
    let puzzle = match seed {
        Some(seed) => {
            info!("Dealing with seed {}", seed);
            generator.generate(&mut StdRng::seed_from_u64(seed))
        }
        None => generator.generate(&mut rand::thread_rng()),
    }
    .context("Failed to generate a puzzle")?;

    println!("{}", puzzle);

    if reveal {
        let solution = ExpressionSolver::new()
            .find_expression(puzzle.numbers())
            .context("Failed to solve the generated puzzle")?;
        if let Some(expr) = solution {
            println!("{}", expr);
        }
    }
    Ok(())
}

fn solve(numbers: &[i64]) -> Result<()> {
    let solver = ExpressionSolver::new();
    info!("Searching for an expression over {:?}", numbers);

    match solver
        .find_expression(numbers)
        .context("Invalid numbers")?
    {
        Some(expr) => println!("{}", expr),
        None => {
            warn!("No matching expression found");
            println!("No solution.");
        }
    }
    Ok(())
}

fn check(expression: &str, numbers: Option<&[i64]>) -> Result<()> {
    let checker = AnswerChecker::default();
    let result = match numbers {
        Some(numbers) => {
            let puzzle = Puzzle::new(numbers.to_vec()).context("Invalid puzzle numbers")?;
            checker.check_for_puzzle(expression, puzzle.numbers())
        }
        None => checker.check(expression),
    };

    match result {
        Ok(expr) => println!("Correct: {} = {}", expr, checker.target()),
        Err(e) => println!("Incorrect: {}", e),
    }
    Ok(())
}
