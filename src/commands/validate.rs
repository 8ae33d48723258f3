//! Validate command implementation.
//!
//! Reads a whole log and checks that every record has the same shape: one
//! target vector length, one pirate count and one pirate vector length for
//! the entire file. Also runs the per-size aggregation so summed buckets are
//! known to be consistent.

use super::models::{LogSummary, ValidateArgs};
use super::utils::{open_log_file, validate_log_path};
use crate::aggregator::{Dump, SampleAggregator};
use crate::output::write_json;
use crate::parser::{open_log, stream_dumps};
use crate::utils::error::ConsistencyError;
use anyhow::Result;
use log::info;
use std::io::Read;

/// Execute the validate command and print the summary
pub fn execute_validate(args: &ValidateArgs) -> Result<LogSummary> {
    validate_log_path(&args.log)?;
    info!("Validating {}", args.log.display());

    let summary = summarize_log(open_log_file(&args.log)?)?;

    if args.json {
        write_json(&summary, &mut std::io::stdout().lock())?;
    } else {
        println!("✓ Valid pirate log: {}", args.log.display());
        println!("  Command: {}", summary.command);
        println!("  Samples: {}", summary.samples);
        println!("  Sizes: {}", summary.sizes.len());
        println!("  Target counters: {}", summary.target_counters);
        println!("  Pirates: {}", summary.pirates);
        println!("  Pirate counters: {}", summary.pirate_counters);
    }

    Ok(summary)
}

/// Read a whole log and describe it
///
/// **Public** - the validate command without printing
///
/// # Errors
/// * framing and decode errors from the log
/// * `ConsistencyError` if any sample differs in shape from the first one
pub fn summarize_log<R: Read>(mut reader: R) -> Result<LogSummary> {
    let header = open_log(&mut reader)?;

    let mut aggregator = SampleAggregator::new();
    let mut shape: Option<Dump> = None;

    for raw in stream_dumps(reader) {
        let dump = Dump::from_raw(&raw?);

        let first = shape.get_or_insert_with(|| dump.clone());
        check_same_shape(first, &dump)?;

        aggregator.ingest(dump)?;
    }

    let samples = aggregator.samples_ingested();
    let sizes = aggregator.finalize().into_iter().map(|(size, _)| size).collect();
    let shape = shape.unwrap_or_default();

    Ok(LogSummary {
        command: header.target().command,
        samples,
        sizes,
        target_counters: shape.target.len(),
        pirate_counters: shape.pirates.first().map_or(0, |p| p.len()),
        pirates: shape.pirates.len(),
        ..Default::default()
    })
}

/// Compare vector lengths of two samples regardless of their sizes
fn check_same_shape(first: &Dump, dump: &Dump) -> Result<(), ConsistencyError> {
    if first.target.len() != dump.target.len() {
        return Err(ConsistencyError::TargetLength {
            size: dump.size,
            expected: first.target.len(),
            found: dump.target.len(),
        });
    }

    if first.pirates.len() != dump.pirates.len() {
        return Err(ConsistencyError::PirateCount {
            size: dump.size,
            expected: first.pirates.len(),
            found: dump.pirates.len(),
        });
    }

    let expected = first.pirates.first().map_or(0, |p| p.len());
    for (i, pirate) in dump.pirates.iter().enumerate() {
        if pirate.len() != expected {
            return Err(ConsistencyError::PirateLength {
                size: dump.size,
                pirate: i,
                expected,
                found: pirate.len(),
            });
        }
    }

    Ok(())
}
