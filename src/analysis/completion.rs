//! Static completion list.

use crate::protocol::CompletionItem;

/// The completion list is fixed. Neither the document nor the cursor
/// position is consulted, so the request works even before any document
/// is open.
pub fn items() -> Vec<CompletionItem> {
    vec![CompletionItem {
        label: "Custom completion".to_string(),
        detail: Some("Some super great details.".to_string()),
        documentation: Some(
            "This is a documentation tooltip. In a real app, this would be useful information."
                .to_string(),
        ),
    }]
}
