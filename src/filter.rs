use crate::policy::{PolicyRules, REDACTION_MARKER, TRUNCATION_MARKER};

/// Post-processes raw completion text: truncation first, then redaction of
/// every restricted-pattern match, in rule order. Returns the final text and
/// whether it differs from the input.
pub fn filter_output(rules: &PolicyRules, raw: &str) -> (String, bool) {
    let mut text = if raw.chars().count() > rules.max_response_len {
        let capped: String = raw.chars().take(rules.max_response_len).collect();
        format!("{capped}{TRUNCATION_MARKER}")
    } else {
        raw.to_owned()
    };

    for pattern in &rules.restricted_patterns {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, REDACTION_MARKER).into_owned();
        }
    }

    let modified = text != raw;
    (text, modified)
}
