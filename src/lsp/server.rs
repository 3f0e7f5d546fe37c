//! Blocking serve loop over standard input and output.

use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use crate::analysis::DocumentStore;
use crate::log;
use crate::lsp::dispatcher::{Connection, Dispatcher};
use crate::rpc::{self, FrameSplitter};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Runs the server over stdin/stdout until the client disconnects or asks
/// to exit.
pub fn run(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    log::init(log_file.as_deref())?;

    info!("Starting phrase-lsp server");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut store = DocumentStore::new();
    serve(stdin.lock(), stdout.lock(), &mut store)?;

    info!("phrase-lsp server stopped");
    Ok(())
}

/// Reads frames from `input` and handles each one fully before reading on.
/// A framing error discards the buffered input and serving continues; the
/// loop ends at end of input or after an `exit` notification.
pub fn serve<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    store: &mut DocumentStore,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new();
    let mut splitter = FrameSplitter::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = match input.read(&mut chunk) {
            Ok(0) => {
                info!("Input stream closed");
                return Ok(());
            }
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read from input stream"),
        };
        splitter.feed(&chunk[..read]);

        loop {
            let frame = match splitter.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    warn!("Framing error, discarding buffered input: {}", e);
                    splitter.discard();
                    break;
                }
            };

            let (method, body) = match rpc::decode_message(&frame) {
                Ok(decoded) => decoded,
                Err(e) => {
                    warn!("Error decoding message: {}", e);
                    continue;
                }
            };

            let mut conn = Connection::new(store, &mut output);
            dispatcher.dispatch(&mut conn, &method, &body);

            if method == "exit" {
                info!("Stopping on exit notification");
                return Ok(());
            }
        }
    }
}
