use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validator::Validate;

use sitter_rank::config::{LoggingSettings, Settings};
use sitter_rank::core::Ranker;
use sitter_rank::pipeline::process_reviews_csv;

/// Rank pet sitters from a CSV export of their reviews
///
/// Reads rows with `sitter_email`, `sitter` and `rating` columns and writes
/// one line per sitter with profile, ratings and search scores, best first.
///
/// Examples:
///   sitter-rank                              # reviews.csv -> sitters.csv
///   sitter-rank data/reviews.csv out.csv
///   sitter-rank --ratings-threshold 5 reviews.csv
#[derive(Parser, Debug)]
#[command(name = "sitter-rank")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Review export to read [default: reviews.csv]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Where to write the ranking [default: sitters.csv]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Extra configuration file, applied over config/ and environment
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level or filter directive (overrides logging.level)
    #[arg(long)]
    log_level: Option<String>,

    /// Profile score of a name using every letter
    #[arg(long)]
    profile_scale: Option<f64>,

    /// Ratings count at which only the ratings score counts
    #[arg(long)]
    ratings_threshold: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut settings, cli);

    init_logging(&settings.logging);

    settings
        .scoring
        .validate()
        .context("Invalid scoring configuration")?;

    let ranker = Ranker::new(settings.scoring_params());
    info!("Ranker initialized with {:?}", ranker.params());

    let result = process_reviews_csv(&settings.io.input, &settings.io.output, &ranker)
        .with_context(|| {
            format!(
                "Failed to rank {} into {}",
                settings.io.input.display(),
                settings.io.output.display()
            )
        })?;

    info!(
        "Done: {} reviews, {} sitters",
        result.total_reviews,
        result.sitters.len()
    );
    Ok(())
}

fn apply_overrides(settings: &mut Settings, cli: Cli) {
    if let Some(input) = cli.input {
        settings.io.input = input;
    }
    if let Some(output) = cli.output {
        settings.io.output = output;
    }
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if let Some(scale) = cli.profile_scale {
        settings.scoring.profile_scale = scale;
    }
    if let Some(threshold) = cli.ratings_threshold {
        settings.scoring.ratings_threshold = threshold;
    }
}

/// Logs go to stderr; RUST_LOG wins over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
