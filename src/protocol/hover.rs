//! Hover request and response shapes.

use serde::{Deserialize, Serialize};

use crate::protocol::message::{Request, RequestId, Response};
use crate::protocol::text_document::{Range, TextDocumentPositionParams};

#[derive(Debug, Clone, Deserialize)]
pub struct HoverRequest {
    #[serde(flatten)]
    pub base: Request,
    pub params: HoverParams,
}

pub type HoverParams = TextDocumentPositionParams;

#[derive(Debug, Clone, Serialize)]
pub struct HoverResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: Option<HoverResult>,
}

impl HoverResponse {
    pub fn new(id: RequestId, contents: String) -> Self {
        Self {
            response: Response::new(id),
            result: Some(HoverResult {
                contents,
                range: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverResult {
    pub contents: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}
