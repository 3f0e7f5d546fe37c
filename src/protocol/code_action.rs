//! Code action request and response shapes.

use serde::{Deserialize, Serialize};

use crate::protocol::message::{Request, RequestId, Response};
use crate::protocol::text_document::{TextDocumentIdentifier, WorkspaceEdit};

#[derive(Debug, Clone, Deserialize)]
pub struct CodeActionRequest {
    #[serde(flatten)]
    pub base: Request,
    pub params: CodeActionParams,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionParams {
    pub text_document: TextDocumentIdentifier,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeActionResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: Vec<CodeAction>,
}

impl CodeActionResponse {
    pub fn new(id: RequestId, actions: Vec<CodeAction>) -> Self {
        Self {
            response: Response::new(id),
            result: actions,
        }
    }
}

/// A titled workspace edit the client may apply on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAction {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<WorkspaceEdit>,
}
