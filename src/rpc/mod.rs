//! Length-prefixed JSON-RPC wire plumbing.
//!
//! - `frame.rs`: incremental frame extraction from the input stream
//! - `codec.rs`: encoding and decoding of complete messages
//! - `error.rs`: framing failure taxonomy

pub mod codec;
pub mod error;
pub mod frame;

pub use codec::{decode_message, encode_message};
pub use error::FramingError;
pub use frame::FrameSplitter;
