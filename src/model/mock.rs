use async_trait::async_trait;

use super::{CompletionRequest, ModelProvider};
use crate::types::Role;

/// Deterministic stand-in used in tests and when no API token is configured.
#[derive(Debug, Default)]
pub struct MockModelProvider;

#[async_trait]
impl ModelProvider for MockModelProvider {
    async fn complete(&self, request: CompletionRequest) -> anyhow::Result<String> {
        let user_turn = request
            .messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map(|message| message.content.as_str())
            .unwrap_or_default();

        Ok(format!("Safegate mock reply.\n\nUser said: {user_turn}"))
    }
}
