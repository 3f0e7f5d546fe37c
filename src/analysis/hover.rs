//! Hover summaries for tracked documents.

use crate::protocol::DocumentUri;

/// One-line summary shown on hover: the document identity and its size in
/// bytes. The cursor position does not change the answer.
pub fn summary(uri: &DocumentUri, text: &str) -> String {
    format!("file={}, characters={}", uri, text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_uri_and_byte_count() {
        let uri = DocumentUri::from("file:///example.go");
        let text = "package main\n\nfunc main() {}\n";

        assert_eq!(summary(&uri, text), "file=file:///example.go, characters=29");
    }

    #[test]
    fn summary_counts_bytes_not_chars() {
        let uri = DocumentUri::from("file:///notes.txt");

        assert_eq!(summary(&uri, "héllo"), "file=file:///notes.txt, characters=6");
    }

    #[test]
    fn summary_of_empty_document() {
        let uri = DocumentUri::from("file:///empty.txt");

        assert_eq!(summary(&uri, ""), "file=file:///empty.txt, characters=0");
    }
}
