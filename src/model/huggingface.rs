use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionRequest, ModelProvider};

const CHAT_COMPLETIONS_URL: &str = "https://router.huggingface.co/v1/chat/completions";

/// Talks to the Hugging Face inference router over its OpenAI-compatible
/// chat-completions API.
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    client: Client,
    api_token: String,
    model: String,
}

impl HuggingFaceProvider {
    pub fn new(api_token: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_token,
            model,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl ModelProvider for HuggingFaceProvider {
    async fn complete(&self, request: CompletionRequest) -> anyhow::Result<String> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: request
                .messages
                .iter()
                .map(|message| WireMessage {
                    role: message.role.as_str(),
                    content: &message.content,
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("model returned no choices"))?;

        Ok(content)
    }
}
