//! In-memory store tracking the text of every open document.

use std::collections::HashMap;

use thiserror::Error;

use crate::analysis::scan::{self, Ruleset};
use crate::protocol::{Diagnostic, DocumentUri};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document {0} was already opened")]
    AlreadyOpened(DocumentUri),

    #[error("document {0} was not opened")]
    NotFound(DocumentUri),
}

/// Owns the open documents and the ruleset applied to them. Lives for the
/// whole server session; handlers borrow it per message.
#[derive(Debug)]
pub struct DocumentStore {
    documents: HashMap<DocumentUri, String>,
    rules: Ruleset,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::with_rules(Ruleset::default())
    }

    pub fn with_rules(rules: Ruleset) -> Self {
        Self {
            documents: HashMap::new(),
            rules,
        }
    }

    /// Starts tracking a document and returns the diagnostics for its text.
    /// Opening a URI twice is an error and leaves the stored text untouched.
    pub fn open(&mut self, uri: DocumentUri, text: String) -> Result<Vec<Diagnostic>, DocumentError> {
        if self.documents.contains_key(&uri) {
            return Err(DocumentError::AlreadyOpened(uri));
        }

        let diagnostics = scan::scan(&text, &self.rules);
        self.documents.insert(uri, text);
        Ok(diagnostics)
    }

    /// Replaces the text of a tracked document and returns fresh diagnostics.
    pub fn update(&mut self, uri: DocumentUri, text: String) -> Result<Vec<Diagnostic>, DocumentError> {
        let Some(slot) = self.documents.get_mut(&uri) else {
            return Err(DocumentError::NotFound(uri));
        };

        *slot = text;
        Ok(scan::scan(slot, &self.rules))
    }

    /// Current text of a tracked document.
    pub fn text(&self, uri: &DocumentUri) -> Result<&str, DocumentError> {
        self.documents
            .get(uri)
            .map(String::as_str)
            .ok_or_else(|| DocumentError::NotFound(uri.clone()))
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> DocumentUri {
        DocumentUri::from(s)
    }

    #[test]
    fn open_tracks_a_new_document() {
        let mut store = DocumentStore::new();

        let diagnostics = store.open(uri("file:///a.txt"), "plain text".to_string()).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.text(&uri("file:///a.txt")).unwrap(), "plain text");
    }

    #[test]
    fn open_reports_diagnostics_for_the_initial_text() {
        let mut store = DocumentStore::new();

        let diagnostics = store
            .open(uri("file:///a.txt"), "VS Code was here".to_string())
            .unwrap();

        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn open_rejects_a_duplicate_uri() {
        let mut store = DocumentStore::new();
        store.open(uri("file:///a.txt"), "original".to_string()).unwrap();

        let err = store
            .open(uri("file:///a.txt"), "replacement".to_string())
            .unwrap_err();

        assert_eq!(err, DocumentError::AlreadyOpened(uri("file:///a.txt")));
        assert_eq!(store.text(&uri("file:///a.txt")).unwrap(), "original");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_replaces_tracked_text() {
        let mut store = DocumentStore::new();
        store.open(uri("file:///a.txt"), "before".to_string()).unwrap();

        let diagnostics = store
            .update(uri("file:///a.txt"), "after Neovim".to_string())
            .unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(store.text(&uri("file:///a.txt")).unwrap(), "after Neovim");
    }

    #[test]
    fn update_requires_an_open_document() {
        let mut store = DocumentStore::new();

        let err = store
            .update(uri("file:///missing.txt"), "text".to_string())
            .unwrap_err();

        assert_eq!(err, DocumentError::NotFound(uri("file:///missing.txt")));
        assert!(store.is_empty());
    }

    #[test]
    fn text_requires_an_open_document() {
        let store = DocumentStore::new();

        let err = store.text(&uri("file:///missing.txt")).unwrap_err();
        assert_eq!(err, DocumentError::NotFound(uri("file:///missing.txt")));
    }

    #[test]
    fn documents_are_isolated_per_uri() {
        let mut store = DocumentStore::new();
        store.open(uri("file:///a.txt"), "aaa".to_string()).unwrap();
        store.open(uri("file:///b.txt"), "bbb".to_string()).unwrap();
        store.update(uri("file:///b.txt"), "BBB".to_string()).unwrap();

        assert_eq!(store.text(&uri("file:///a.txt")).unwrap(), "aaa");
        assert_eq!(store.text(&uri("file:///b.txt")).unwrap(), "BBB");
        assert_eq!(store.len(), 2);
    }
}
