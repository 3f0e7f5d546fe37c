//! Incremental extraction of length-prefixed frames from a byte stream.
//!
//! The input arrives in arbitrary chunks. `FrameSplitter` buffers them and
//! hands back one complete frame at a time, so the rest of the server never
//! sees a partial message.

use crate::rpc::error::FramingError;

/// Separator between the header block and the message body.
pub(crate) const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";

/// Header prefix announcing the body length in bytes.
pub(crate) const CONTENT_LENGTH_PREFIX: &str = "Content-Length: ";

/// Buffers stream chunks and yields complete `header + separator + body`
/// frames in arrival order.
#[derive(Debug)]
pub struct FrameSplitter {
    buf: Vec<u8>,
}

impl FrameSplitter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Appends a chunk read from the stream. Chunk boundaries carry no
    /// meaning; a frame may span any number of chunks.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Removes and returns the next complete frame, `Ok(None)` when more
    /// data is needed. An error means the buffer head is not a valid frame;
    /// the buffer is left untouched so the caller decides how to recover.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>, FramingError> {
        match frame_len(&self.buf)? {
            Some(len) => {
                let frame = self.buf[..len].to_vec();
                self.buf.drain(..len);
                Ok(Some(frame))
            }
            None => Ok(None),
        }
    }

    /// Drops everything buffered so far. Used after a framing error, when
    /// the stream position can no longer be trusted.
    pub fn discard(&mut self) {
        self.buf.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Default for FrameSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Total length of the first complete frame in `buf`, or `None` when the
/// separator or part of the body has not arrived yet.
fn frame_len(buf: &[u8]) -> Result<Option<usize>, FramingError> {
    let Some(separator) = find_separator(buf) else {
        return Ok(None);
    };
    let body_len = parse_content_length(&buf[..separator])?;
    let body_start = separator + HEADER_SEPARATOR.len();
    if buf.len().saturating_sub(body_start) < body_len {
        return Ok(None);
    }
    Ok(Some(body_start + body_len))
}

/// Byte offset of the first header separator, if any.
pub(crate) fn find_separator(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_SEPARATOR.len())
        .position(|window| window == HEADER_SEPARATOR)
}

/// Parses the body length out of a raw header block.
pub(crate) fn parse_content_length(header: &[u8]) -> Result<usize, FramingError> {
    let invalid = || FramingError::InvalidContentLength {
        header: String::from_utf8_lossy(header).into_owned(),
    };

    let header = std::str::from_utf8(header).map_err(|_| invalid())?;
    let value = header.strip_prefix(CONTENT_LENGTH_PREFIX).ok_or_else(invalid)?;
    value.parse::<usize>().map_err(|_| invalid())
}
