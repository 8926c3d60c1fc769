mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The gateway credential may live in the environment instead of the file.
    if let Ok(api_key) = env::var("LLM_API_KEY") {
        config.llm.api_key = api_key;
    }

    if config.llm.api_key.is_empty() {
        return Err(Error::config(
            "LLM API key is not configured (set llm.api_key or LLM_API_KEY)",
        ));
    }

    Ok(config)
}
