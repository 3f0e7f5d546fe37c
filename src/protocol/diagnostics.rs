//! Diagnostic shapes and the publish notification pushed after every sync.

use serde::{Deserialize, Serialize};

use crate::protocol::message::Notification;
use crate::protocol::text_document::{DocumentUri, Range};

pub const METHOD_PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

/// Diagnostic severity, encoded as its numeric protocol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticSeverity(pub i32);

impl DiagnosticSeverity {
    pub const ERROR: Self = Self(1);
    pub const WARNING: Self = Self(2);
    pub const INFORMATION: Self = Self(3);
    pub const HINT: Self = Self(4);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable label for what produced the diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    pub uri: DocumentUri,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishDiagnosticsNotification {
    #[serde(flatten)]
    pub notification: Notification,
    pub params: PublishDiagnosticsParams,
}

impl PublishDiagnosticsNotification {
    pub fn new(uri: DocumentUri, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            notification: Notification::new(METHOD_PUBLISH_DIAGNOSTICS),
            params: PublishDiagnosticsParams { uri, diagnostics },
        }
    }
}
