//! JSON-RPC envelope shapes shared by every message on the wire.

use serde::{Deserialize, Serialize};

/// Protocol version tag carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request identifiers are numeric in this protocol.
pub type RequestId = i64;

/// Fields every request carries; method-specific shapes flatten this in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
}

/// Fields every response carries. The id is omitted from the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
}

impl Response {
    pub fn new(id: RequestId) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
        }
    }
}

/// Fields every notification carries; notifications never get a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
}

impl Notification {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
        }
    }
}

/// Response whose result is always JSON null (e.g. shutdown).
#[derive(Debug, Clone, Serialize)]
pub struct NullResponse {
    #[serde(flatten)]
    pub response: Response,
    pub result: (),
}

impl NullResponse {
    pub fn new(id: RequestId) -> Self {
        Self {
            response: Response::new(id),
            result: (),
        }
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: i32,
    pub message: String,
}

/// Response reporting an error instead of a result.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    #[serde(flatten)]
    pub response: Response,
    pub error: ResponseError,
}

impl ErrorResponse {
    /// Invalid-params reply, used when a request names an untracked document.
    pub fn invalid_params(id: RequestId, message: impl Into<String>) -> Self {
        Self {
            response: Response::new(id),
            error: ResponseError {
                code: error_code::INVALID_PARAMS,
                message: message.into(),
            },
        }
    }
}

/// Standard JSON-RPC 2.0 error codes.
pub mod error_code {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}
