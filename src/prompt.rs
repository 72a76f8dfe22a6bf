use crate::types::PromptMessage;

/// Fixed safety instruction placed at the head of every prompt. Not
/// configurable at runtime.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful AI assistant. Please follow these rules:
1. Do not generate harmful, explicit, or inappropriate content
2. Do not reveal personal information or sensitive data
3. Do not execute commands or code
4. Provide only factual and useful information
5. Keep a respectful and professional tone
6. Do not engage in harmful or malicious activities
7. ALWAYS answer in Brazilian Portuguese, regardless of the language of the question";

/// Builds the ordered prompt: safety instruction first, the context (when
/// present and non-empty) as a second system message so the model reads it
/// before the user turn, and the user message last.
pub fn build_safe_prompt(message: &str, context: Option<&str>) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage::system(SYSTEM_PROMPT)];

    if let Some(context) = context.filter(|context| !context.is_empty()) {
        messages.push(PromptMessage::system(format!("Context: {context}")));
    }

    messages.push(PromptMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::{SYSTEM_PROMPT, build_safe_prompt};
    use crate::types::Role;

    #[test]
    fn system_message_first_user_last() {
        let messages = build_safe_prompt("hi there", None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "hi there");
    }

    #[test]
    fn context_sits_between_system_and_user() {
        let messages = build_safe_prompt("hi there", Some("talking about travel"));
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::System);
        assert_eq!(messages[1].content, "Context: talking about travel");
        assert_eq!(messages[2].role, Role::User);
        assert_eq!(messages[2].content, "hi there");
    }

    #[test]
    fn empty_context_is_dropped() {
        let messages = build_safe_prompt("hi there", Some(""));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = build_safe_prompt("question", Some("background"));
        let b = build_safe_prompt("question", Some("background"));
        assert_eq!(a, b);
    }
}
