use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{API_KEY_ENV, AzureAiConfig};
use crate::services::error_handling::AiError;

const DEFAULT_SYSTEM_MESSAGE: &str = "You are an AI assistant specialized in content creation and social media analytics. Provide helpful, actionable insights and suggestions.";

const MAX_TOKENS: u32 = 13107;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;

/// One message in the chat-completions payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The exact request body sent to the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub stop: Option<String>,
}

/// Raw HTTP outcome; non-2xx responses still arrive here with their body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

/// Seam between the client and the HTTP stack. Production uses
/// [`ReqwestTransport`]; tests substitute [`MockCompletionTransport`].
#[automock]
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn execute(
        &self,
        url: &str,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<TransportReply, AiError>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionTransport for ReqwestTransport {
    async fn execute(
        &self,
        url: &str,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<TransportReply, AiError> {
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::transport(e.to_string()))?;

        Ok(TransportReply { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the Azure OpenAI chat-completions deployment.
///
/// Holds no state that outlives a call, so dropping a pending future
/// abandons the request safely. Clones share the underlying connection
/// pool.
#[derive(Clone)]
pub struct AzureAiClient {
    config: AzureAiConfig,
    transport: Arc<dyn CompletionTransport>,
}

impl AzureAiClient {
    pub fn new(config: AzureAiConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: AzureAiConfig, transport: Arc<dyn CompletionTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AzureAiConfig {
        &self.config
    }

    /// Send one chat completion and return the first choice's text.
    ///
    /// Exactly one network call per invocation; no caching, no retry.
    /// An empty prompt or a missing API key fails before any network
    /// access.
    pub async fn complete(
        &self,
        user_prompt: &str,
        system_message: Option<&str>,
    ) -> Result<String, AiError> {
        let prompt = user_prompt.trim();
        if prompt.is_empty() {
            return Err(AiError::EmptyPrompt);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AiError::configuration(format!(
                    "Azure API key not configured. Please set the {API_KEY_ENV} environment variable."
                ))
            })?;

        let request = CompletionRequest {
            messages: vec![
                PromptMessage::system(system_message.unwrap_or(DEFAULT_SYSTEM_MESSAGE)),
                PromptMessage::user(prompt),
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop: None,
        };

        let url = self.config.completions_url();
        debug!(deployment = %self.config.deployment, "sending chat completion request");

        let reply = self.transport.execute(&url, api_key, &request).await?;

        if !(200..300).contains(&reply.status) {
            let message = upstream_error_message(&reply.body);
            warn!(status = reply.status, %message, "chat completion rejected upstream");
            return Err(AiError::Upstream {
                status: reply.status,
                message,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&reply.body).map_err(|_| AiError::EmptyResponse)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyResponse)
    }
}

/// Best-effort extraction of `error.message` from an upstream error body;
/// falls back to the raw body text.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
