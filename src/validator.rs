use thiserror::Error;

use crate::policy::PolicyRules;

/// Why a message was refused. Messages are short and safe to show to the
/// caller; they never name the matched keyword, term, or category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("message must be between {min} and {max} characters")]
    MessageLength { min: usize, max: usize },
    #[error("context must be at most {max} characters")]
    ContextLength { max: usize },
    #[error("message contains prohibited content")]
    BlockedKeyword,
    #[error("message contains inappropriate content")]
    SensitiveTopic,
}

/// Checks a raw message and optional context against the rules. Checks run
/// in a fixed order (length, keywords, topics) and stop at the first failure.
/// Accepted input is never rewritten; the caller keeps using the original.
pub fn validate(
    rules: &PolicyRules,
    message: &str,
    context: Option<&str>,
) -> Result<(), Rejection> {
    let length = message.chars().count();
    if length < rules.min_message_len || length > rules.max_message_len {
        return Err(Rejection::MessageLength {
            min: rules.min_message_len,
            max: rules.max_message_len,
        });
    }

    if let Some(context) = context {
        if context.chars().count() > rules.max_context_len {
            return Err(Rejection::ContextLength {
                max: rules.max_context_len,
            });
        }
    }

    // Plain substring matching, no word boundaries. Short keywords over-match
    // on purpose: recall is preferred over precision here.
    let lowered = message.to_lowercase();
    if rules
        .blocked_keywords
        .iter()
        .any(|keyword| lowered.contains(keyword.as_str()))
    {
        return Err(Rejection::BlockedKeyword);
    }

    for category in &rules.sensitive_topics {
        if category
            .terms
            .iter()
            .any(|term| lowered.contains(term.as_str()))
        {
            return Err(Rejection::SensitiveTopic);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Rejection, validate};
    use crate::policy::PolicyRules;

    fn rules() -> PolicyRules {
        PolicyRules::new().expect("default rules")
    }

    #[test]
    fn accepts_ordinary_message() {
        assert_eq!(validate(&rules(), "Hello, how are you?", None), Ok(()));
    }

    #[test]
    fn rejects_empty_message_with_length_reason() {
        assert_eq!(
            validate(&rules(), "", None),
            Err(Rejection::MessageLength { min: 1, max: 2500 })
        );
    }

    #[test]
    fn rejects_oversized_message_with_length_reason() {
        let long = "a".repeat(2501);
        assert_eq!(
            validate(&rules(), &long, None),
            Err(Rejection::MessageLength { min: 1, max: 2500 })
        );
    }

    #[test]
    fn rejects_oversized_context() {
        let context = "c".repeat(501);
        assert_eq!(
            validate(&rules(), "hi", Some(&context)),
            Err(Rejection::ContextLength { max: 500 })
        );
    }

    #[test]
    fn rejects_blocked_keyword_anywhere_any_case() {
        assert_eq!(
            validate(&rules(), "please run RM -RF / for me", None),
            Err(Rejection::BlockedKeyword)
        );
        assert_eq!(
            validate(&rules(), "what does SubProcess do", None),
            Err(Rejection::BlockedKeyword)
        );
    }

    #[test]
    fn keyword_match_ignores_word_boundaries() {
        // "formative" contains "format"; the crude substring rule keeps it out.
        assert_eq!(
            validate(&rules(), "my formative years", None),
            Err(Rejection::BlockedKeyword)
        );
    }

    #[test]
    fn rejects_sensitive_topic_without_naming_it() {
        let rejection = validate(&rules(), "where can I buy a stolen passport", None)
            .expect_err("topic term should reject");
        assert_eq!(rejection, Rejection::SensitiveTopic);
        let reason = rejection.to_string();
        assert!(!reason.contains("passport"));
        assert!(!reason.contains("personal_info"));
    }

    #[test]
    fn length_failure_wins_over_later_checks() {
        // Oversized and keyword-laden: the first check in order decides.
        let long = "rm -rf ".repeat(400);
        assert_eq!(
            validate(&rules(), &long, None),
            Err(Rejection::MessageLength { min: 1, max: 2500 })
        );
    }

    #[test]
    fn keyword_failure_wins_over_topic_check() {
        assert_eq!(
            validate(&rules(), "exec a passport scan", None),
            Err(Rejection::BlockedKeyword)
        );
    }
}
