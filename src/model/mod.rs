mod huggingface;
mod mock;

use async_trait::async_trait;

pub use huggingface::HuggingFaceProvider;
pub use mock::MockModelProvider;

use crate::types::PromptMessage;

/// Generation parameters are fixed per the gateway contract.
pub const MAX_COMPLETION_TOKENS: u32 = 2048;
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: COMPLETION_TEMPERATURE,
        }
    }
}

/// The completion backend boundary. The pipeline depends only on this trait;
/// any transport or backend failure surfaces as an opaque error and is never
/// retried here.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> anyhow::Result<String>;
}
