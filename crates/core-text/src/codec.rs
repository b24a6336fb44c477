//! Newline-delimited UTF-8 codec.
//!
//! Reading treats every `\n` as a record terminator; a final record without a
//! terminator is still a line, and a trailing `\r` on a record is dropped.
//! Writing emits every line followed by exactly one `\n`, the last line included.

use std::io::{Read, Write};

use crate::{Buffer, TextError};

/// Decode raw file bytes into a buffer. Empty input yields one empty line.
pub fn decode(bytes: &[u8]) -> Result<Buffer, TextError> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if bytes.is_empty() {
        return Ok(Buffer::new());
    }
    let mut lines = Vec::new();
    for (idx, record) in body.split(|b| *b == b'\n').enumerate() {
        let record = record.strip_suffix(b"\r").unwrap_or(record);
        let text = std::str::from_utf8(record).map_err(|e| TextError::Decode {
            line: idx + 1,
            offset: e.valid_up_to(),
        })?;
        lines.push(text);
    }
    Ok(Buffer::from_lines(lines))
}

/// Read everything from `reader` and decode it.
pub fn read<R: Read>(mut reader: R) -> Result<Buffer, TextError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let buffer = decode(&bytes)?;
    tracing::debug!(target: "io", size_bytes = bytes.len(), lines = buffer.line_count(), "decode_ok");
    Ok(buffer)
}

/// Encode a buffer as bytes (every line terminated by `\n`).
pub fn encode(buffer: &Buffer) -> Vec<u8> {
    let mut out = String::with_capacity(buffer.char_count() + buffer.line_count());
    for line in buffer.lines() {
        out.extend(line);
        out.push('\n');
    }
    out.into_bytes()
}

/// Write the encoded buffer to `writer`, returning the number of bytes written.
pub fn write<W: Write>(buffer: &Buffer, mut writer: W) -> Result<usize, TextError> {
    let bytes = encode(buffer);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(bytes.len())
}
