//! Shared helpers for driving a server session over in-memory streams.

use std::io::Read;

use serde_json::{Value, json};

use phrase_lsp::analysis::DocumentStore;
use phrase_lsp::lsp::server;
use phrase_lsp::rpc::{FrameSplitter, encode_message};

pub fn request(id: i64, method: &str, params: Value) -> Vec<u8> {
    encode_message(&json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    }))
}

pub fn notification(method: &str, params: Value) -> Vec<u8> {
    encode_message(&json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
    }))
}

pub fn initialize_request(id: i64) -> Vec<u8> {
    request(
        id,
        "initialize",
        json!({"clientInfo": {"name": "e2e-client", "version": "1.0.0"}}),
    )
}

pub fn did_open(uri: &str, text: &str) -> Vec<u8> {
    notification(
        "textDocument/didOpen",
        json!({"textDocument": {
            "uri": uri,
            "languageId": "plaintext",
            "version": 1,
            "text": text,
        }}),
    )
}

pub fn did_change(uri: &str, version: i32, texts: &[&str]) -> Vec<u8> {
    let changes: Vec<Value> = texts.iter().map(|text| json!({"text": text})).collect();
    notification(
        "textDocument/didChange",
        json!({
            "textDocument": {"uri": uri, "version": version},
            "contentChanges": changes,
        }),
    )
}

pub fn position_request(id: i64, method: &str, uri: &str, line: i32, character: i32) -> Vec<u8> {
    request(
        id,
        method,
        json!({
            "textDocument": {"uri": uri},
            "position": {"line": line, "character": character},
        }),
    )
}

/// Feeds the whole script to a fresh server and returns every payload it
/// wrote, in order.
pub fn run_session(script: &[Vec<u8>]) -> Vec<Value> {
    let input: Vec<u8> = script.concat();
    run_session_reader(input.as_slice())
}

/// Same as `run_session` for inputs that control their own read boundaries.
pub fn run_session_reader<R: Read>(input: R) -> Vec<Value> {
    let mut output = Vec::new();
    let mut store = DocumentStore::new();
    server::serve(input, &mut output, &mut store).unwrap();
    decode_payloads(&output)
}

/// Splits a raw output stream back into JSON payloads.
pub fn decode_payloads(stream: &[u8]) -> Vec<Value> {
    let mut splitter = FrameSplitter::new();
    splitter.feed(stream);

    let mut payloads = Vec::new();
    while let Some(frame) = splitter.next_frame().unwrap() {
        let separator = frame
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .unwrap();
        payloads.push(serde_json::from_slice(&frame[separator + 4..]).unwrap());
    }
    assert!(splitter.is_empty(), "output ended mid-frame");
    payloads
}

/// Reader handing out one script segment per `read` call, so tests control
/// exactly how the stream is chunked.
pub struct SegmentedReader {
    segments: Vec<Vec<u8>>,
    next: usize,
}

impl SegmentedReader {
    pub fn new(segments: Vec<Vec<u8>>) -> Self {
        Self { segments, next: 0 }
    }
}

impl Read for SegmentedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let Some(segment) = self.segments.get(self.next) else {
            return Ok(0);
        };
        assert!(segment.len() <= buf.len(), "segment larger than read buffer");
        buf[..segment.len()].copy_from_slice(segment);
        self.next += 1;
        Ok(segment.len())
    }
}
