//! Method-name dispatch over decoded messages.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::DocumentStore;
use crate::lsp::handlers;
use crate::rpc;

/// What a handler gets to work with: the session's document store and the
/// outgoing half of the connection.
pub struct Connection<'a> {
    pub store: &'a mut DocumentStore,
    out: &'a mut dyn Write,
}

impl<'a> Connection<'a> {
    pub fn new(store: &'a mut DocumentStore, out: &'a mut dyn Write) -> Self {
        Self { store, out }
    }

    /// Frames and writes one outgoing message.
    pub fn send<T: Serialize>(&mut self, payload: &T) -> io::Result<()> {
        self.out.write_all(&rpc::encode_message(payload))?;
        self.out.flush()
    }
}

/// Failures a handler reports back to the dispatch loop. The loop logs them
/// and keeps serving; none of these end the session.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to decode message body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to write reply: {0}")]
    Io(#[from] io::Error),
}

type HandlerFn = fn(&mut Connection<'_>, &[u8]) -> Result<(), HandlerError>;

/// Routes each decoded message to the handler registered for its method.
pub struct Dispatcher {
    handlers: HashMap<&'static str, HandlerFn>,
}

impl Dispatcher {
    /// Builds the method table once at startup; serving never mutates it.
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, HandlerFn> = HashMap::new();
        table.insert("initialize", handlers::initialize);
        table.insert("initialized", handlers::initialized);
        table.insert("textDocument/didOpen", handlers::did_open);
        table.insert("textDocument/didChange", handlers::did_change);
        table.insert("textDocument/hover", handlers::hover);
        table.insert("textDocument/definition", handlers::definition);
        table.insert("textDocument/codeAction", handlers::code_action);
        table.insert("textDocument/completion", handlers::completion);
        table.insert("shutdown", handlers::shutdown);
        table.insert("exit", handlers::exit);
        Self { handlers: table }
    }

    /// Runs the handler for `method`, if one is registered. Unknown methods
    /// are skipped without a reply.
    pub fn dispatch(&self, conn: &mut Connection<'_>, method: &str, body: &[u8]) {
        let Some(handler) = self.handlers.get(method) else {
            debug!("Ignoring unsupported method: {}", method);
            return;
        };

        if let Err(e) = handler(conn, body) {
            warn!("Error handling {}: {}", method, e);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_methods_produce_no_output() {
        let mut store = DocumentStore::new();
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut store, &mut out);

        Dispatcher::new().dispatch(&mut conn, "workspace/symbol", b"{}");

        assert!(out.is_empty());
    }

    #[test]
    fn undecodable_body_produces_no_output() {
        let mut store = DocumentStore::new();
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut store, &mut out);

        Dispatcher::new().dispatch(&mut conn, "textDocument/hover", b"{\"id\":true}");

        assert!(out.is_empty());
    }

    #[test]
    fn send_frames_the_payload() {
        let mut store = DocumentStore::new();
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut store, &mut out);

        conn.send(&serde_json::json!({"ok": true})).unwrap();

        assert_eq!(out, b"Content-Length: 11\r\n\r\n{\"ok\":true}");
    }
}
