//! Lexical scan flagging configured phrases line by line.

use crate::config;
use crate::protocol::{Diagnostic, DiagnosticSeverity, Range};

/// A literal phrase to look for, with the diagnostic it produces.
#[derive(Debug, Clone)]
pub struct FlagRule {
    pub phrase: String,
    pub severity: DiagnosticSeverity,
    pub source: String,
    pub message: String,
}

/// The phrases a scan reacts to.
#[derive(Debug, Clone)]
pub struct Ruleset {
    pub banned: FlagRule,
    pub preferred: FlagRule,
    /// Replacement text used when censoring the banned phrase.
    pub censored: String,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            banned: FlagRule {
                phrase: config::BANNED_PHRASE.to_string(),
                severity: DiagnosticSeverity::ERROR,
                source: "common-sense".to_string(),
                message: "Please make sure we use language we can all agree on".to_string(),
            },
            preferred: FlagRule {
                phrase: config::PREFERRED_PHRASE.to_string(),
                severity: DiagnosticSeverity::HINT,
                source: "good-taste".to_string(),
                message: "Great choice :)".to_string(),
            },
            censored: config::CENSORED_PHRASE.to_string(),
        }
    }
}

/// Diagnostics for `text`, ordered by line first and rule second. Only the
/// first occurrence of a phrase on each line is reported.
pub fn scan(text: &str, rules: &Ruleset) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (line_number, line) in text.split('\n').enumerate() {
        for rule in [&rules.banned, &rules.preferred] {
            let Some((start, end)) = first_match(line, &rule.phrase) else {
                continue;
            };
            diagnostics.push(Diagnostic {
                range: Range::on_line(line_number as i32, start as i32, end as i32),
                severity: rule.severity,
                code: None,
                source: Some(rule.source.clone()),
                message: rule.message.clone(),
            });
        }
    }
    diagnostics
}

/// Byte span of the first occurrence of `phrase` in `line`.
pub(crate) fn first_match(line: &str, phrase: &str) -> Option<(usize, usize)> {
    let start = line.find(phrase)?;
    Some((start, start + phrase.len()))
}
