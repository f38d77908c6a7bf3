use async_trait::async_trait;
use giongo_completion::{CompletionError, CompletionService, OutputSchema, ProviderMetadata};
use serde_json::{Value, json};

/// OpenAI chat completions with structured output
#[derive(Clone)]
pub struct OpenAiCompletion {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiCompletion {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn request_body(&self, prompt: &str, schema: &OutputSchema) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": schema,
            },
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletion {
    async fn complete(&self, prompt: &str, schema: &OutputSchema) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::AuthenticationError);
        }

        tracing::debug!("Requesting completion from {} ({})", self.api_url, self.model);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt, schema))
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(CompletionError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(CompletionError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError(format!("HTTP {status}: {body}")));
        }

        let json: Value = response.json().await.map_err(|e| {
            CompletionError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        extract_content(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

/// Pull the first choice's message text out of a chat completion body
fn extract_content(json: &Value) -> Result<String, CompletionError> {
    let message = json["choices"]
        .get(0)
        .map(|choice| &choice["message"])
        .ok_or(CompletionError::EmptyResponse)?;

    if let Some(refusal) = message["refusal"].as_str() {
        return Err(CompletionError::Refusal(refusal.to_string()));
    }

    message["content"]
        .as_str()
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or(CompletionError::EmptyResponse)
}
