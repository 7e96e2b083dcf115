//! OpenAI chat-completions API client.

use super::conversion::{from_chat_response, to_chat_request};
use super::dto::ChatResponse;
use async_trait::async_trait;
use kosh_core::{GenerateRequest, GenerateResponse};
use kosh_error::{KoshResult, ModelError, ModelErrorKind};
use kosh_interface::KoshDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// OpenAI API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
    ///
    /// Reads the API key from the `OPENAI_API_KEY` environment variable and
    /// the endpoint from `OPENAI_BASE_URL` when set (OpenAI-compatible
    /// gateways), falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(skip_all, fields(model = %model))]
    pub fn new(model: String) -> Result<Self, ModelError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|e| {
            ModelError::new(ModelErrorKind::Configuration(format!(
                "OPENAI_API_KEY not set: {}",
                e
            )))
        })?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_API_URL.to_string());

        Ok(Self::with_api_key(api_key, model).with_base_url(base_url))
    }

    /// Creates a new OpenAI client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Creating OpenAI client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
            model,
        }
    }

    /// Set the base URL (for OpenAI-compatible endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a chat request to the OpenAI API.
    async fn send(&self, request: &GenerateRequest) -> Result<ChatResponse, ModelError> {
        let chat_request = to_chat_request(request, &self.model)?;
        let url = format!("{}/chat/completions", self.base_url);

        debug!(url = %url, model = %chat_request.model(), "Sending OpenAI API request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to OpenAI API");
                ModelError::new(ModelErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status = status, body = %body, "OpenAI API returned error");
            return Err(ModelError::new(ModelErrorKind::Api {
                status,
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse OpenAI response");
            ModelError::new(ModelErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl KoshDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> KoshResult<GenerateResponse> {
        let response = self.send(req).await?;

        if let Some(usage) = response.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Received response from OpenAI"
            );
        }

        from_chat_response(&response).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
