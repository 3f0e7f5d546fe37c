//! Initialize handshake shapes: client info in, advertised capabilities out.

use serde::{Deserialize, Serialize};

use crate::protocol::message::{Request, RequestId, Response};

/// Documents are synchronized by sending their full text on every change.
pub const TEXT_DOCUMENT_SYNC_FULL: i32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct InitializeRequest {
    #[serde(flatten)]
    pub base: Request,
    #[serde(default)]
    pub params: InitializeParams,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    #[serde(default)]
    pub process_id: Option<i64>,
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
    #[serde(default)]
    pub root_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitializeResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: InitializeResult,
}

impl InitializeResponse {
    pub fn new(id: RequestId, result: InitializeResult) -> Self {
        Self {
            response: Response::new(id),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub capabilities: ServerCapabilities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_document_sync: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_action_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_provider: Option<CompletionOptions>,
}

/// Marker advertising completion support; no trigger characters are declared.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletionOptions {}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
