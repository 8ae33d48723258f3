//! JSON output for log summaries.

use crate::utils::error::OutputError;
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty-printed JSON followed by a newline
///
/// **Public** - used by `validate --json`
pub fn write_json<T, W>(value: &T, writer: &mut W) -> Result<(), OutputError>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value).map_err(OutputError::SerializationFailed)?;
    writeln!(writer).map_err(OutputError::WriteFailed)?;
    Ok(())
}
