use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use thiserror::Error;
use tracing::info;

use crate::{
    filter,
    model::{CompletionRequest, ModelProvider},
    policy::PolicyRules,
    prompt,
    types::{ChatRequest, ChatResponse},
    validator::{self, Rejection},
};

/// Terminal outcome of a request that did not produce a response. `Rejected`
/// is the expected, caller-facing case; `Backend` wraps completion failures
/// (including the timeout) and anything else unexpected, and its detail stays
/// server-side.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Rejected(#[from] Rejection),
    #[error("completion backend failed")]
    Backend(#[source] anyhow::Error),
}

/// Runs each request through validate, build prompt, call completion, filter.
/// Stateless across requests; the rules and provider are shared read-only.
pub struct ModerationPipeline {
    rules: Arc<PolicyRules>,
    model: Arc<dyn ModelProvider>,
    completion_timeout: Duration,
}

impl ModerationPipeline {
    pub fn new(
        rules: Arc<PolicyRules>,
        model: Arc<dyn ModelProvider>,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            rules,
            model,
            completion_timeout,
        }
    }

    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatResponse, PipelineError> {
        validator::validate(&self.rules, &request.message, request.context.as_deref())?;
        info!(message = %preview(&request.message), "accepted chat request");

        let messages = prompt::build_safe_prompt(&request.message, request.context.as_deref());

        let completion = tokio::time::timeout(
            self.completion_timeout,
            self.model.complete(CompletionRequest::new(messages)),
        )
        .await
        .map_err(|_| {
            PipelineError::Backend(anyhow!(
                "completion timed out after {:?}",
                self.completion_timeout
            ))
        })?
        .map_err(PipelineError::Backend)?;

        let raw = completion.trim();
        let (response, filtered) = filter::filter_output(&self.rules, raw);

        info!(filtered, "chat response ready");
        Ok(ChatResponse { response, filtered })
    }
}

fn preview(message: &str) -> String {
    message.chars().take(100).collect()
}
