//! CLI entry point for the tabular processing pipeline.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tabclean::{FillMethod, Pipeline, ProcessConfig};
use tracing::error;

/// CLI-compatible fill method enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFillMethod {
    /// Forward fill, then backward fill for leading gaps
    Ffill,
    /// Replace missing values with zero
    Zero,
}

impl From<CliFillMethod> for FillMethod {
    fn from(cli: CliFillMethod) -> Self {
        match cli {
            CliFillMethod::Ffill => FillMethod::Ffill,
            CliFillMethod::Zero => FillMethod::Zero,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Data Processor - clean + analyze CSV/Excel files",
    long_about = "Cleans a tabular data file, removes duplicate rows and writes a \
                  cleaned table, a JSON/HTML summary, histogram images and run \
                  metadata into the output directory.\n\n\
                  EXAMPLES:\n  \
                  # Basic usage\n  \
                  tabclean data.csv\n\n  \
                  # Custom output directory and stricter column drop\n  \
                  tabclean data.xlsx -o results --drop-threshold 0.4\n\n  \
                  # Deduplicate on a column subset\n  \
                  tabclean data.csv --dedup-cols Name City"
)]
struct Args {
    /// Path to CSV or Excel file to process
    input: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Encoding for CSV input (auto if omitted)
    #[arg(long)]
    encoding: Option<String>,

    /// Drop columns with > threshold missing fraction (0-1)
    #[arg(long, default_value = "0.6")]
    drop_threshold: f64,

    /// Method to fill missing values
    #[arg(long, value_enum, default_value = "ffill")]
    fill_method: CliFillMethod,

    /// Columns to consider for deduplication (default: all columns)
    #[arg(long, num_args = 0..)]
    dedup_cols: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);

    let mut builder = ProcessConfig::builder()
        .output_dir(&args.output)
        .drop_threshold(args.drop_threshold)
        .fill_method(args.fill_method.into());

    if let Some(ref encoding) = args.encoding {
        builder = builder.encoding(encoding.as_str());
    }
    if !args.dedup_cols.is_empty() {
        builder = builder.dedup_columns(args.dedup_cols.clone());
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match Pipeline::new(config).run(&args.input) {
        Ok(metadata) => {
            println!("Processing complete. Output saved to: {}", metadata.output_dir);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
