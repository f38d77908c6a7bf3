use std::env;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-2024-08-06".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CompletionConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Only models with structured output support work here
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound for a single completion request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl CompletionConfig {
    pub fn new() -> Self {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let api_url = env::var("OPENAI_API_URL").unwrap_or_else(|_| default_api_url());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model());
        let timeout_seconds = env_or("REQUEST_TIMEOUT_SECONDS", default_timeout_seconds());

        Self {
            api_key,
            api_url,
            model,
            timeout_seconds,
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
