//! Quick fixes offered wherever the banned phrase appears.

use std::collections::HashMap;

use crate::analysis::scan::{Ruleset, first_match};
use crate::protocol::{CodeAction, DocumentUri, Range, TextEdit, WorkspaceEdit};

/// Two actions per flagged line: replace the banned phrase with the
/// preferred one, or censor it in place. Matching follows the scan rule,
/// so only the first occurrence on each line is offered a fix.
pub fn actions(uri: &DocumentUri, text: &str, rules: &Ruleset) -> Vec<CodeAction> {
    let mut actions = Vec::new();
    for (line_number, line) in text.split('\n').enumerate() {
        let Some((start, end)) = first_match(line, &rules.banned.phrase) else {
            continue;
        };
        let span = Range::on_line(line_number as i32, start as i32, end as i32);

        actions.push(CodeAction {
            title: format!("Replace {} with a superior editor", rules.censored),
            edit: Some(single_edit(uri, span, &rules.preferred.phrase)),
        });
        actions.push(CodeAction {
            title: format!("Censor to {}", rules.censored),
            edit: Some(single_edit(uri, span, &rules.censored)),
        });
    }
    actions
}

fn single_edit(uri: &DocumentUri, range: Range, new_text: &str) -> WorkspaceEdit {
    WorkspaceEdit {
        changes: HashMap::from([(
            uri.clone(),
            vec![TextEdit {
                range,
                new_text: new_text.to_string(),
            }],
        )]),
    }
}
