//! Length-prefixed frame reader and writer.
//!
//! A frame is a `u32` length in native byte order followed by exactly that
//! many bytes of encoded message. Running out of input before the length
//! field is an orderly end of stream; running out anywhere after it is a
//! framing error.

use crate::utils::config::LENGTH_PREFIX_SIZE;
use crate::utils::error::{FormatError, ParseError};
use log::{trace, warn};
use prost::Message;
use std::io::{ErrorKind, Read, Write};

/// Read `expected.len()` bytes and compare them against `expected`
///
/// **Public** - first step of opening a log
///
/// # Returns
/// `Ok(false)` on mismatch or short read, `Err` only on I/O failure
pub fn read_magic<R: Read + ?Sized>(reader: &mut R, expected: &[u8]) -> std::io::Result<bool> {
    let mut buf = vec![0u8; expected.len()];
    let n = read_full(reader, &mut buf)?;

    Ok(n == expected.len() && buf == expected)
}

/// Read one frame and decode it as `M`
///
/// **Public** - main entry point for frame decoding
///
/// # Returns
/// * `Ok(Some(message))` - a complete frame was decoded
/// * `Ok(None)` - orderly end of stream (no bytes left at a frame boundary)
///
/// # Errors
/// * `FormatError::TruncatedLength` - 1 to 3 bytes of length prefix available
/// * `FormatError::TruncatedPacket` - payload shorter than declared
/// * `ParseError::Decode` - payload is not a valid `M`
pub fn read_frame<M, R>(reader: &mut R) -> Result<Option<M>, ParseError>
where
    M: Message + Default,
    R: Read + ?Sized,
{
    let mut head = [0u8; LENGTH_PREFIX_SIZE];
    match read_full(reader, &mut head)? {
        0 => return Ok(None),
        LENGTH_PREFIX_SIZE => {}
        _ => return Err(FormatError::TruncatedLength.into()),
    }

    let length = u32::from_ne_bytes(head) as usize;
    if length == 0 {
        // A zero-length frame ends the log; later frames are never read.
        warn!("Zero-length frame treated as end of stream");
        return Ok(None);
    }

    let mut packet = Vec::new();
    (&mut *reader).take(length as u64).read_to_end(&mut packet)?;
    if packet.len() != length {
        return Err(FormatError::TruncatedPacket.into());
    }

    trace!("Decoding {} byte frame", length);
    Ok(Some(M::decode(packet.as_slice())?))
}

/// Write the magic token
pub fn write_magic<W: Write + ?Sized>(writer: &mut W, magic: &[u8]) -> std::io::Result<()> {
    writer.write_all(magic)
}

/// Encode `message` and write it as one frame
///
/// **Public** - inverse of [`read_frame`]
///
/// # Errors
/// `ErrorKind::InvalidInput` if the message encodes to zero bytes (a
/// zero-length frame reads back as end of stream) or exceeds `u32::MAX`
pub fn write_frame<M, W>(writer: &mut W, message: &M) -> std::io::Result<()>
where
    M: Message,
    W: Write + ?Sized,
{
    let payload = message.encode_to_vec();
    if payload.is_empty() {
        return Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            "empty message cannot be framed; it would read back as end of stream",
        ));
    }

    let length = u32::try_from(payload.len()).map_err(|_| {
        std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("message too large for a frame ({} bytes)", payload.len()),
        )
    })?;

    writer.write_all(&length.to_ne_bytes())?;
    writer.write_all(&payload)
}

/// Fill `buf` as far as the reader allows
///
/// **Private** - like `read_exact`, but reports how much was read instead of
/// failing on a short read
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
