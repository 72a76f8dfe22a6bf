use std::{env, net::SocketAddr, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind: SocketAddr,
    pub hf_token: Option<String>,
    pub model_id: String,
    pub completion_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_owned());
        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let http_bind = http_bind.parse()?;

        let completion_timeout_secs = match env::var("COMPLETION_TIMEOUT_SECS") {
            Ok(raw) => raw.parse()?,
            Err(_) => 30,
        };

        Ok(Self {
            http_bind,
            hf_token: env::var("HF_TOKEN").ok(),
            model_id: env::var("MODEL_ID")
                .unwrap_or_else(|_| "deepseek-ai/DeepSeek-R1-Distill-Qwen-32B".to_owned()),
            completion_timeout: Duration::from_secs(completion_timeout_secs),
        })
    }
}
