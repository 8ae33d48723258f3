//! Pirate Log Tools CLI
//!
//! Converts cache pirate performance counter logs to CSV, dumps them as
//! text, and validates them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use pirate_log::commands::{
    display_version, execute_csv, execute_dump, execute_validate, validate_csv_args, CsvArgs,
    CsvOptions, DumpArgs, ValidateArgs,
};
use pirate_log::utils::config::{DEFAULT_FIELD_SEPARATOR, READ_FAILURE_EXIT_CODE};

/// Pirate Log Tools - performance counter logs from the cache pirate
#[derive(Parser, Debug)]
#[command(name = "pirate-log")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a log to CSV, summing samples of the same size
    Csv {
        /// Pirate log to analyze
        log: PathBuf,

        /// Output field separator
        #[arg(long = "fs", default_value = DEFAULT_FIELD_SEPARATOR)]
        field_separator: String,

        /// Don't include CSV header with field descriptions
        #[arg(long)]
        no_header: bool,

        /// Don't sum counters
        #[arg(long)]
        no_aggregate: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the header and every sample of a log
    Dump {
        /// Pirate log to analyze
        log: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a log for framing and consistency errors
    Validate {
        /// Pirate log to analyze
        log: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli.command) {
        log::debug!("{:?}", e);
        eprintln!("Failed to read pirate log: {:#}", e);
        std::process::exit(READ_FAILURE_EXIT_CODE);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Csv {
            log,
            field_separator,
            no_header,
            no_aggregate,
            output,
        } => {
            let args = CsvArgs {
                log,
                output,
                options: CsvOptions {
                    field_separator,
                    header: !no_header,
                    aggregate: !no_aggregate,
                    ..Default::default()
                },
            };

            validate_csv_args(&args)?;
            execute_csv(&args)?;
        }

        Commands::Dump { log, output } => {
            execute_dump(&DumpArgs { log, output })?;
        }

        Commands::Validate { log, json } => {
            execute_validate(&ValidateArgs { log, json })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
