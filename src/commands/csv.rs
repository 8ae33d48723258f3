//! CSV command implementation.
//!
//! The csv command:
//! 1. Validates the magic and reads the header
//! 2. Prints the numbered header comment (unless disabled)
//! 3. Streams samples, either summing them per size or printing them raw
//! 4. Prints aggregated rows sorted by size

use super::models::{CsvArgs, CsvOptions, CsvReport};
use super::utils::{open_log_file, validate_log_path};
use crate::aggregator::{Dump, SampleAggregator};
use crate::output::{open_output, write_dump, write_header};
use crate::parser::{open_log, stream_dumps, PerfHeader};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{Read, Write};
use std::time::Instant;

/// Execute the csv command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Log file cannot be opened
/// * Framing, decode or consistency errors while reading
/// * Output cannot be written
pub fn execute_csv(args: &CsvArgs) -> Result<CsvReport> {
    let start_time = Instant::now();

    info!("Converting {} to CSV", args.log.display());

    // The output is only created once the log is known to be a pirate log
    let mut reader = open_log_file(&args.log)?;
    let header = open_log(&mut reader)?;
    let mut out = open_output(args.output.as_deref()).context("Failed to open output")?;

    let report = write_csv(&header, reader, &mut out, &args.options)?;

    info!(
        "Wrote {} rows from {} samples in {:.2}s",
        report.rows,
        report.samples,
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Convert a whole log from `reader` into CSV on `writer`
///
/// **Public** - the csv command without file plumbing
pub fn convert_csv<R, W>(mut reader: R, writer: &mut W, options: &CsvOptions) -> Result<CsvReport>
where
    R: Read,
    W: Write + ?Sized,
{
    let header = open_log(&mut reader)?;
    write_csv(&header, reader, writer, options)
}

/// Write the header comment and rows for a reader positioned after the header
///
/// **Private** - shared by [`convert_csv`] and [`execute_csv`]
fn write_csv<R, W>(
    header: &PerfHeader,
    reader: R,
    writer: &mut W,
    options: &CsvOptions,
) -> Result<CsvReport>
where
    R: Read,
    W: Write + ?Sized,
{
    if options.header {
        write_header(writer, header, &options.comment_prefix, options.first_field)?;
    }

    let mut report = CsvReport::default();
    let stream = stream_dumps(reader);

    if options.aggregate {
        let mut aggregator = SampleAggregator::new();
        for raw in stream {
            aggregator.ingest_raw(&raw?)?;
        }

        report.samples = aggregator.samples_ingested();
        debug!(
            "Aggregated {} samples into {} sizes",
            report.samples,
            aggregator.len()
        );

        for (_, dump) in aggregator.finalize() {
            write_dump(writer, &dump, &options.field_separator)?;
            report.rows += 1;
        }
    } else {
        for raw in stream {
            write_dump(writer, &Dump::from_raw(&raw?), &options.field_separator)?;
            report.samples += 1;
            report.rows += 1;
        }
    }

    writer.flush()?;
    Ok(report)
}

/// Validate csv arguments
///
/// **Public** - can be called before execute_csv for early validation
pub fn validate_csv_args(args: &CsvArgs) -> Result<()> {
    validate_log_path(&args.log)?;

    let separator = &args.options.field_separator;
    if separator.is_empty() {
        anyhow::bail!("Field separator cannot be empty");
    }

    if separator.contains(['\n', '\r']) {
        anyhow::bail!("Field separator cannot contain a line break");
    }

    if let Some(output) = &args.output {
        crate::output::validate_path(output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args_with_separator(separator: &str) -> CsvArgs {
        CsvArgs {
            log: PathBuf::from("pirate.log"),
            options: CsvOptions {
                field_separator: separator.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_csv_args(&args_with_separator(",")).is_ok());
    }

    #[test]
    fn test_validate_args_empty_separator() {
        assert!(validate_csv_args(&args_with_separator("")).is_err());
    }

    #[test]
    fn test_validate_args_newline_separator() {
        assert!(validate_csv_args(&args_with_separator("\n")).is_err());
    }

    #[test]
    fn test_validate_args_empty_log() {
        let args = CsvArgs {
            log: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_csv_args(&args).is_err());
    }

    #[test]
    fn test_default_options() {
        let options = CsvOptions::default();
        assert_eq!(options.field_separator, " ");
        assert!(options.header);
        assert!(options.aggregate);
    }
}
