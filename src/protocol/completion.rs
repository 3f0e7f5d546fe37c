//! Completion request and response shapes.

use serde::{Deserialize, Serialize};

use crate::protocol::message::{Request, RequestId, Response};
use crate::protocol::text_document::TextDocumentPositionParams;

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionRequest {
    #[serde(flatten)]
    pub base: Request,
    pub params: CompletionParams,
}

pub type CompletionParams = TextDocumentPositionParams;

#[derive(Debug, Clone, Serialize)]
pub struct CompletionResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: Vec<CompletionItem>,
}

impl CompletionResponse {
    pub fn new(id: RequestId, items: Vec<CompletionItem>) -> Self {
        Self {
            response: Response::new(id),
            result: items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}
