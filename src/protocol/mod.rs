//! Wire-level message shapes for the protocol.
//!
//! - `message.rs`: JSON-RPC envelopes, error codes
//! - `initialize.rs`: handshake request/response, server capabilities
//! - `text_document.rs`: URIs, positions, sync notifications, edits
//! - `diagnostics.rs`: diagnostics and the publish notification
//! - `hover.rs`, `definition.rs`, `code_action.rs`, `completion.rs`: one file
//!   per position-based feature

pub mod code_action;
pub mod completion;
pub mod definition;
pub mod diagnostics;
pub mod hover;
pub mod initialize;
pub mod message;
pub mod text_document;

pub use code_action::{CodeAction, CodeActionParams, CodeActionRequest, CodeActionResponse};
pub use completion::{CompletionItem, CompletionParams, CompletionRequest, CompletionResponse};
pub use definition::{DefinitionParams, DefinitionRequest, DefinitionResponse};
pub use diagnostics::{
    Diagnostic, DiagnosticSeverity, PublishDiagnosticsNotification, PublishDiagnosticsParams,
};
pub use hover::{HoverParams, HoverRequest, HoverResponse, HoverResult};
pub use initialize::{
    ClientInfo, CompletionOptions, InitializeParams, InitializeRequest, InitializeResponse,
    InitializeResult, ServerCapabilities, ServerInfo, TEXT_DOCUMENT_SYNC_FULL,
};
pub use message::{
    ErrorResponse, JSONRPC_VERSION, Notification, NullResponse, Request, RequestId, Response,
    ResponseError,
};
pub use text_document::{
    DidChangeTextDocumentNotification, DidChangeTextDocumentParams, DidOpenTextDocumentNotification,
    DidOpenTextDocumentParams, DocumentUri, Location, Position, Range,
    TextDocumentContentChangeEvent, TextDocumentIdentifier, TextDocumentItem,
    TextDocumentPositionParams, TextEdit, VersionedTextDocumentIdentifier, WorkspaceEdit,
};
