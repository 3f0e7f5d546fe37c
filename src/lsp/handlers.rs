//! One handler per supported method.
//!
//! Notifications log their failures and move on. Requests answer document
//! lookup failures with an invalid-params error reply so the client is
//! never left waiting on an id.

use tracing::{info, warn};

use crate::analysis;
use crate::config;
use crate::lsp::dispatcher::{Connection, HandlerError};
use crate::protocol::{
    CodeActionRequest, CodeActionResponse, CompletionOptions, CompletionRequest,
    CompletionResponse, DefinitionRequest, DefinitionResponse, DidChangeTextDocumentNotification,
    DidOpenTextDocumentNotification, ErrorResponse, HoverRequest, HoverResponse,
    InitializeRequest, InitializeResponse, InitializeResult, NullResponse,
    PublishDiagnosticsNotification, Request, ServerCapabilities, ServerInfo,
    TEXT_DOCUMENT_SYNC_FULL,
};

pub(crate) fn initialize(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: InitializeRequest = serde_json::from_slice(body)?;

    let client = request.params.client_info.as_ref();
    let client_name = client.map_or("unknown", |info| info.name.as_str());
    let client_version = client
        .and_then(|info| info.version.as_deref())
        .unwrap_or("unknown");
    info!("Connected to client: {} {}", client_name, client_version);

    let result = InitializeResult {
        capabilities: server_capabilities(),
        server_info: Some(ServerInfo {
            name: config::SERVER_NAME.to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    };
    conn.send(&InitializeResponse::new(request.base.id, result))?;
    Ok(())
}

fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TEXT_DOCUMENT_SYNC_FULL),
        hover_provider: Some(true),
        definition_provider: Some(true),
        code_action_provider: Some(true),
        completion_provider: Some(CompletionOptions::default()),
    }
}

pub(crate) fn initialized(_conn: &mut Connection<'_>, _body: &[u8]) -> Result<(), HandlerError> {
    info!("Client finished initializing");
    Ok(())
}

pub(crate) fn did_open(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let notification: DidOpenTextDocumentNotification = serde_json::from_slice(body)?;
    let document = notification.params.text_document;

    info!("Opened document: {}", document.uri);
    match conn.store.open(document.uri.clone(), document.text) {
        Ok(diagnostics) => {
            conn.send(&PublishDiagnosticsNotification::new(document.uri, diagnostics))?;
        }
        Err(e) => warn!("Error opening document: {}", e),
    }
    Ok(())
}

pub(crate) fn did_change(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let notification: DidChangeTextDocumentNotification = serde_json::from_slice(body)?;
    let uri = notification.params.text_document.uri;

    // Full sync: every entry replaces the whole document, in arrival order.
    for change in notification.params.content_changes {
        match conn.store.update(uri.clone(), change.text) {
            Ok(diagnostics) => {
                conn.send(&PublishDiagnosticsNotification::new(uri.clone(), diagnostics))?;
            }
            Err(e) => warn!("Error updating document: {}", e),
        }
    }
    Ok(())
}

pub(crate) fn hover(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: HoverRequest = serde_json::from_slice(body)?;
    let uri = request.params.text_document.uri;

    let summary = conn
        .store
        .text(&uri)
        .map(|text| analysis::hover::summary(&uri, text));
    match summary {
        Ok(contents) => conn.send(&HoverResponse::new(request.base.id, contents))?,
        Err(e) => {
            warn!("Error answering hover: {}", e);
            conn.send(&ErrorResponse::invalid_params(request.base.id, e.to_string()))?;
        }
    }
    Ok(())
}

pub(crate) fn definition(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: DefinitionRequest = serde_json::from_slice(body)?;
    let uri = request.params.text_document.uri;

    let location = conn
        .store
        .text(&uri)
        .map(|_| analysis::definition::location(&uri, request.params.position));
    match location {
        Ok(location) => conn.send(&DefinitionResponse::new(request.base.id, location))?,
        Err(e) => {
            warn!("Error answering definition: {}", e);
            conn.send(&ErrorResponse::invalid_params(request.base.id, e.to_string()))?;
        }
    }
    Ok(())
}

pub(crate) fn code_action(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: CodeActionRequest = serde_json::from_slice(body)?;
    let uri = request.params.text_document.uri;

    let actions = match conn.store.text(&uri) {
        Ok(text) => Ok(analysis::code_action::actions(&uri, text, conn.store.rules())),
        Err(e) => Err(e),
    };
    match actions {
        Ok(actions) => conn.send(&CodeActionResponse::new(request.base.id, actions))?,
        Err(e) => {
            warn!("Error answering code action: {}", e);
            conn.send(&ErrorResponse::invalid_params(request.base.id, e.to_string()))?;
        }
    }
    Ok(())
}

pub(crate) fn completion(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: CompletionRequest = serde_json::from_slice(body)?;

    // The list is static, so no document lookup happens here.
    conn.send(&CompletionResponse::new(
        request.base.id,
        analysis::completion::items(),
    ))?;
    Ok(())
}

pub(crate) fn shutdown(conn: &mut Connection<'_>, body: &[u8]) -> Result<(), HandlerError> {
    let request: Request = serde_json::from_slice(body)?;

    info!("Shutdown requested");
    conn.send(&NullResponse::new(request.id))?;
    Ok(())
}

pub(crate) fn exit(_conn: &mut Connection<'_>, _body: &[u8]) -> Result<(), HandlerError> {
    info!("Exit notification received");
    Ok(())
}
