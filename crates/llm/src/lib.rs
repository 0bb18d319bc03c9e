//! NeuroAdapt chat-completion infrastructure adapter.
//!
//! Implements the [`adaptation::ChatCompletion`] trait for an Azure OpenAI
//! deployment. Additional providers are added as new client types in this
//! crate without any changes to the `adaptation` crate.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All HTTP transport, request formatting, and response
//! parsing live here. The [`adaptation`] crate sees only
//! [`adaptation::ChatCompletion`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use adaptation::{
    ApiKey, ApiVersion, ChatCompletion, ChatCompletionError, ChatMessage, CompletionChoice,
    ModelName,
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for an Azure OpenAI deployment.
///
/// Passed to [`AzureOpenAiClient::new`], which validates the settings and
/// fails fast; a constructed client never holds an unusable configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the resource (e.g. `https://example.openai.azure.com`).
    pub endpoint: String,
    /// Secret sent in the `api-key` header of every request.
    pub api_key: ApiKey,
    /// Value of the `api-version` query parameter.
    pub api_version: ApiVersion,
    /// Upper bound for one request/response round trip.
    pub request_timeout: Duration,
}

/// Errors raised while constructing a client from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured endpoint is not a valid absolute URL.
    #[error("Invalid endpoint URL '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The endpoint exactly as configured.
        endpoint: String,
        /// Description of the parse failure.
        message: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP transport: {message}")]
    Transport {
        /// Description of the builder failure.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Request body for the chat-completions route.
#[derive(Debug, Serialize)]
struct CompletionRequestBody<'a> {
    messages: &'a [ChatMessage],
}

/// Response body returned by the chat-completions route.
///
/// Fields other than `choices` (id, usage, ...) are ignored. A body without
/// a `choices` array parses as zero choices; the domain treats that as a
/// remote failure.
#[derive(Debug, Deserialize)]
struct CompletionResponseBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

/// Parses a chat-completions response body into provider-neutral choices.
fn parse_completion_body(body: &str) -> Result<Vec<CompletionChoice>, ChatCompletionError> {
    let parsed: CompletionResponseBody =
        serde_json::from_str(body).map_err(|e| ChatCompletionError::MalformedResponse {
            message: e.to_string(),
        })?;
    Ok(parsed.choices)
}

// ---------------------------------------------------------------------------
// Azure OpenAI client
// ---------------------------------------------------------------------------

/// Chat-completion client for a single Azure OpenAI deployment.
///
/// Holds immutable connection settings plus a pooled [`reqwest::Client`];
/// one instance is shared across any number of calls. No retry, no
/// streaming: every invocation is exactly one request/response round trip.
#[derive(Debug, Clone)]
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: ApiKey,
    api_version: ApiVersion,
}

impl AzureOpenAiClient {
    /// Builds a client from `config`, failing fast on invalid settings.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Url::parse(&config.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            api_version: config.api_version,
        })
    }

    /// Returns the chat-completions URL for `model`.
    fn completions_url(&self, model: &ModelName) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, model, self.api_version
        )
    }
}

#[async_trait]
impl ChatCompletion for AzureOpenAiClient {
    async fn send_chat_completion(
        &self,
        model: &ModelName,
        messages: &[ChatMessage],
    ) -> Result<Vec<CompletionChoice>, ChatCompletionError> {
        let url = self.completions_url(model);
        let body = CompletionRequestBody { messages };

        debug!(%model, message_count = messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatCompletionError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ChatCompletionError::Transport {
                message: e.to_string(),
            })?;

        if !status.is_success() {
            error!(status = status.as_u16(), "chat completion request rejected");
            return Err(ChatCompletionError::Api {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let choices = parse_completion_body(&response_text)?;
        debug!(choice_count = choices.len(), "chat completion response received");
        Ok(choices)
    }
}
