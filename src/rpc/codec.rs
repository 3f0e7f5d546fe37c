//! Encoding and decoding of complete wire messages.

use serde::{Deserialize, Serialize};

use crate::rpc::error::FramingError;
use crate::rpc::frame::{CONTENT_LENGTH_PREFIX, HEADER_SEPARATOR, find_separator, parse_content_length};

/// The one field every dispatchable message must carry.
#[derive(Debug, Deserialize)]
struct BaseMessage {
    method: String,
}

/// Frames `payload` as `Content-Length: <n>\r\n\r\n<json>`.
///
/// Outgoing payloads are built by this crate, so a serialization failure is
/// a programming error and panics rather than surfacing to the client.
pub fn encode_message<T: Serialize>(payload: &T) -> Vec<u8> {
    let body = serde_json::to_vec(payload).expect("outgoing message failed to serialize");

    let mut message = Vec::with_capacity(body.len() + 32);
    message.extend_from_slice(CONTENT_LENGTH_PREFIX.as_bytes());
    message.extend_from_slice(body.len().to_string().as_bytes());
    message.extend_from_slice(HEADER_SEPARATOR);
    message.extend_from_slice(&body);
    message
}

/// Splits a complete frame into its method name and raw body bytes.
///
/// The body is returned undecoded beyond the method probe; the dispatch
/// layer deserializes it against the shape the method expects. Bytes past
/// the announced length are ignored.
pub fn decode_message(message: &[u8]) -> Result<(String, Vec<u8>), FramingError> {
    let separator = find_separator(message).ok_or(FramingError::MissingSeparator)?;
    let expected = parse_content_length(&message[..separator])?;

    let body_start = separator + HEADER_SEPARATOR.len();
    let available = message.len() - body_start;
    if available < expected {
        return Err(FramingError::TruncatedBody { expected, available });
    }

    let body = &message[body_start..body_start + expected];
    let base: BaseMessage = serde_json::from_slice(body)?;
    Ok((base.method, body.to_vec()))
}
