//! Pirate log stream: magic, one header frame, then sample frames until EOF.
//!
//! Samples are decoded lazily, one frame per `next()`, so a log is never
//! held in memory as a whole.

use super::frame::{read_frame, read_magic, write_frame, write_magic};
use super::schema::{PerfCtrDump, PerfHeader};
use crate::utils::config::LOG_MAGIC;
use crate::utils::error::{FormatError, ParseError};
use log::debug;
use std::io::{Read, Write};

/// Validate the magic and read the header record
///
/// **Public** - must be called before [`stream_dumps`]
///
/// # Errors
/// * `FormatError::InvalidMagic` - file does not start with `PIRATEv1`
/// * `FormatError::MissingHeader` - file ends right after the magic
/// * any framing or decode error from the header frame
pub fn open_log<R: Read + ?Sized>(reader: &mut R) -> Result<PerfHeader, ParseError> {
    if !read_magic(reader, LOG_MAGIC)? {
        return Err(FormatError::InvalidMagic.into());
    }

    let header: PerfHeader = read_frame(reader)?.ok_or(FormatError::MissingHeader)?;

    debug!(
        "Read header: {} target counters, {} pirate counters",
        header.t_setup.as_ref().map_or(0, |t| t.ctr.len()),
        header.p_setup.as_ref().map_or(0, |p| p.ctr.len())
    );

    Ok(header)
}

/// Stream sample records from a reader positioned after the header
///
/// **Public** - main entry point for sample iteration
pub fn stream_dumps<R: Read>(reader: R) -> DumpStream<R> {
    DumpStream {
        reader,
        finished: false,
        count: 0,
    }
}

/// Lazy, one-pass sequence of sample records
///
/// Yields `Err` at most once; after an error or the end of the log every
/// further call returns `None`.
#[derive(Debug)]
pub struct DumpStream<R> {
    reader: R,
    finished: bool,
    count: usize,
}

impl<R: Read> DumpStream<R> {
    /// Read the next sample, `Ok(None)` at orderly end of stream
    pub fn read_next(&mut self) -> Result<Option<PerfCtrDump>, ParseError> {
        if self.finished {
            return Ok(None);
        }

        match read_frame::<PerfCtrDump, _>(&mut self.reader) {
            Ok(Some(dump)) => {
                self.count += 1;
                Ok(Some(dump))
            }
            Ok(None) => {
                debug!("End of log after {} samples", self.count);
                self.finished = true;
                Ok(None)
            }
            Err(e) => {
                self.finished = true;
                Err(e)
            }
        }
    }

    /// Number of samples decoded so far
    pub fn samples_read(&self) -> usize {
        self.count
    }
}

impl<R: Read> Iterator for DumpStream<R> {
    type Item = Result<PerfCtrDump, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for DumpStream<R> {}

/// Writes pirate logs in the format [`open_log`] reads
///
/// **Public** - used to produce logs and test fixtures
pub struct LogWriter<W: Write> {
    writer: W,
    dumps: usize,
}

impl<W: Write> LogWriter<W> {
    /// Write the magic and the header frame
    ///
    /// # Errors
    /// `ErrorKind::InvalidInput` for a header that encodes to zero bytes
    pub fn new(mut writer: W, header: &PerfHeader) -> std::io::Result<Self> {
        write_magic(&mut writer, LOG_MAGIC)?;
        write_frame(&mut writer, header)?;
        Ok(Self { writer, dumps: 0 })
    }

    /// Append one sample frame
    ///
    /// An empty dump is rejected and not counted
    pub fn write_dump(&mut self, dump: &PerfCtrDump) -> std::io::Result<()> {
        write_frame(&mut self.writer, dump)?;
        self.dumps += 1;
        Ok(())
    }

    /// Number of samples written so far
    pub fn dumps_written(&self) -> usize {
        self.dumps
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
