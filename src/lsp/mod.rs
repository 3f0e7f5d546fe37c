//! Protocol session layer.
//!
//! - `server.rs`: blocking serve loop over stdin/stdout
//! - `dispatcher.rs`: method table and per-message routing
//! - `handlers.rs`: one handler per supported method

pub mod dispatcher;
pub mod handlers;
pub mod server;

pub use dispatcher::{Connection, Dispatcher};
