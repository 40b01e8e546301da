//! Environment-driven configuration. Secrets stay in the environment (or a
//! local `.env`); nothing here persists or caches them.

use std::env;

use anyhow::Result;
use tracing::{error, info};

use crate::gemini;
use crate::github;

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the hosting provider API. Required.
    pub github_token: String,
    /// Hosting provider API base; defaults to the public endpoint.
    pub github_api_url: String,
    /// Key for the generative-text API. Optional: without it, repository
    /// summaries return the fallback text instead of failing.
    pub gemini_api_key: Option<String>,
    /// Generation endpoint; defaults to the public `generateContent` URL.
    pub gemini_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let github_token = match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.is_empty() => token,
            _ => {
                error!("GITHUB_TOKEN missing in environment");
                return Err(anyhow::anyhow!(
                    "GITHUB_TOKEN must be set to query the provider API"
                ));
            }
        };

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| github::GITHUB_API_URL.to_string());
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());
        if gemini_api_key.is_none() {
            info!("GEMINI_API_KEY not set; repository summaries will return the fallback text");
        }
        let gemini_api_url =
            env::var("GEMINI_API_URL").unwrap_or_else(|_| gemini::GEMINI_API_URL.to_string());

        info!(
            github_api_url = %github_api_url,
            gemini_configured = gemini_api_key.is_some(),
            "Loaded configuration from environment"
        );

        Ok(Config {
            github_token,
            github_api_url,
            gemini_api_key,
            gemini_api_url,
        })
    }
}
