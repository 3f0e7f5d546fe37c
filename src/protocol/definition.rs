//! Go-to-definition request and response shapes.

use serde::{Deserialize, Serialize};

use crate::protocol::message::{Request, RequestId, Response};
use crate::protocol::text_document::{Location, TextDocumentPositionParams};

#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionRequest {
    #[serde(flatten)]
    pub base: Request,
    pub params: DefinitionParams,
}

pub type DefinitionParams = TextDocumentPositionParams;

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: Option<Location>,
}

impl DefinitionResponse {
    pub fn new(id: RequestId, location: Location) -> Self {
        Self {
            response: Response::new(id),
            result: Some(location),
        }
    }
}
