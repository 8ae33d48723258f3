//! Dump command implementation.
//!
//! Prints the decoded header followed by every sample in arrival order,
//! without aggregation.

use super::models::DumpArgs;
use super::utils::{open_log_file, validate_log_path};
use crate::output::{format_dump, format_header, open_output};
use crate::parser::{open_log, stream_dumps, PerfHeader};
use anyhow::{Context, Result};
use log::info;
use std::io::{Read, Write};

/// Execute the dump command, returning the number of samples printed
pub fn execute_dump(args: &DumpArgs) -> Result<usize> {
    validate_log_path(&args.log)?;
    info!("Dumping {}", args.log.display());

    let mut reader = open_log_file(&args.log)?;
    let header = open_log(&mut reader)?;
    let mut out = open_output(args.output.as_deref()).context("Failed to open output")?;

    write_text(&header, reader, &mut out)
}

/// Write the header and every sample of a log as text blocks
///
/// **Public** - the dump command without file plumbing
pub fn dump_text<R, W>(mut reader: R, writer: &mut W) -> Result<usize>
where
    R: Read,
    W: Write + ?Sized,
{
    let header = open_log(&mut reader)?;
    write_text(&header, reader, writer)
}

/// **Private** - text blocks for a reader positioned after the header
fn write_text<R, W>(header: &PerfHeader, reader: R, writer: &mut W) -> Result<usize>
where
    R: Read,
    W: Write + ?Sized,
{
    writeln!(writer, "{}", format_header(header))?;

    let mut samples = 0;
    for raw in stream_dumps(reader) {
        writeln!(writer, "{}", format_dump(&raw?))?;
        samples += 1;
    }

    writer.flush()?;
    Ok(samples)
}
