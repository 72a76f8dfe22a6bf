use std::sync::Arc;

use safegate::{
    config::AppConfig,
    http::{self, AppState},
    model::{HuggingFaceProvider, MockModelProvider, ModelProvider},
    pipeline::ModerationPipeline,
    policy::PolicyRules,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let rules = Arc::new(PolicyRules::new()?);
    let model = build_model_provider(&config);

    let pipeline = Arc::new(ModerationPipeline::new(
        rules,
        model,
        config.completion_timeout,
    ));

    let app = http::router(AppState { pipeline });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!("Safegate HTTP API listening on {}", config.http_bind);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

fn build_model_provider(config: &AppConfig) -> Arc<dyn ModelProvider> {
    if let Some(token) = config.hf_token.clone() {
        Arc::new(HuggingFaceProvider::new(token, config.model_id.clone()))
    } else {
        warn!("HF_TOKEN is not set; using mock model provider");
        Arc::new(MockModelProvider)
    }
}
