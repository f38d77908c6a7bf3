use serde::Serialize;

/// Structured completion provider interface
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` and ask for a reply conforming to `schema`.
    ///
    /// Returns the raw text of the reply; callers parse it themselves.
    async fn complete(&self, prompt: &str, schema: &OutputSchema) -> Result<String, CompletionError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// JSON schema the reply must conform to
#[derive(Debug, Clone, Serialize)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

impl OutputSchema {
    /// Strict object schema where every listed property is a required string
    pub fn string_fields(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: &[(&str, &str)],
    ) -> Self {
        let properties: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|(field, description)| {
                (
                    field.to_string(),
                    serde_json::json!({ "type": "string", "description": description }),
                )
            })
            .collect();
        let required: Vec<&str> = fields.iter().map(|(field, _)| *field).collect();

        Self {
            name: name.into(),
            description: description.into(),
            schema: serde_json::json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }),
            strict: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Completion returned no content")]
    EmptyResponse,

    #[error("Model refused the request: {0}")]
    Refusal(String),
}
