//! A language server that flags banned phrases in open documents and
//! offers quick fixes, speaking JSON-RPC over length-prefixed frames.

pub mod analysis;
pub mod config;
pub mod log;
pub mod lsp;
pub mod protocol;
pub mod rpc;
