use regex::Regex;

/// Replacement text for every restricted-pattern match in model output.
pub const REDACTION_MARKER: &str = "[FILTERED]";

/// Appended when model output is cut at `max_response_len`.
pub const TRUNCATION_MARKER: &str = "...";

/// A named group of lowercase trigger terms that reject a message on a
/// substring hit.
#[derive(Debug, Clone)]
pub struct TopicCategory {
    pub name: String,
    pub terms: Vec<String>,
}

impl TopicCategory {
    pub fn new(name: &str, terms: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            terms: terms.iter().map(|term| (*term).to_owned()).collect(),
        }
    }
}

/// The full moderation ruleset. Built once at startup and shared read-only;
/// no request ever mutates it. Tests construct alternates directly.
#[derive(Debug, Clone)]
pub struct PolicyRules {
    /// Message length bounds, counted in characters.
    pub min_message_len: usize,
    pub max_message_len: usize,
    /// Upper bound on the optional context string, in characters.
    pub max_context_len: usize,
    /// Lowercase substrings that reject a message wherever they occur.
    pub blocked_keywords: Vec<String>,
    pub sensitive_topics: Vec<TopicCategory>,
    /// Applied in order over model output; every match is redacted.
    pub restricted_patterns: Vec<Regex>,
    /// Cap on returned text, in characters.
    pub max_response_len: usize,
}

impl PolicyRules {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            min_message_len: 1,
            max_message_len: 2500,
            max_context_len: 500,
            blocked_keywords: [
                "sql",
                "exec",
                "eval",
                "system",
                "os.",
                "subprocess",
                "rm -rf",
                "format",
                "delete",
                "drop table",
            ]
            .iter()
            .map(|keyword| (*keyword).to_owned())
            .collect(),
            sensitive_topics: vec![
                TopicCategory::new("explicit_content", &["porn", "xxx", "nsfw"]),
                TopicCategory::new("hate_speech", &["hate", "racist", "discrimination"]),
                TopicCategory::new("violence", &["kill", "murder", "attack"]),
                TopicCategory::new("personal_info", &["ssn", "credit card", "passport"]),
            ],
            restricted_patterns: compile_patterns(&[
                // credential-style label: value pairs
                r"(?i)(password|secret|key):\s*\w+",
                // script-injection markers
                r"(?i)(<script>|javascript:)",
                // SQL statements
                r"(?i)(SELECT|INSERT|UPDATE|DELETE)\s+FROM",
            ])?,
            max_response_len: 4096,
        })
    }
}

pub fn compile_patterns(patterns: &[&str]) -> anyhow::Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).map_err(anyhow::Error::from))
        .collect()
}
