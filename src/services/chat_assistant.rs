use tracing::debug;

use crate::domain::chat::{ChatMessage, ChatMode};
use crate::services::azure_ai::AzureAiClient;
use crate::services::error_handling::AiError;
use crate::services::normalize::{Decoded, decode_list};

const MAX_FOLLOW_UP_SUGGESTIONS: usize = 3;

/// One assistant conversation: mode-specific system prompt, message
/// history, and follow-up suggestions refreshed after each reply.
pub struct ChatAssistant {
    client: AzureAiClient,
    mode: ChatMode,
    messages: Vec<ChatMessage>,
    suggestions: Vec<String>,
}

impl ChatAssistant {
    pub fn new(client: AzureAiClient, mode: ChatMode) -> Self {
        Self {
            client,
            mode,
            messages: vec![ChatMessage::bot(mode.welcome_message())],
            suggestions: mode.starter_suggestions(),
        }
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Send a user message and record the assistant's reply.
    ///
    /// Whitespace-only input is ignored. The user message is recorded
    /// before the request, so it stays in the history even when the call
    /// fails; a failed reply appends no bot message and propagates its
    /// error. Suggestion refresh is best-effort: any failure keeps the
    /// previous suggestions.
    pub async fn send(&mut self, content: &str) -> Result<Option<String>, AiError> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::user(content));

        let system_prompt = self.mode.system_prompt();
        let reply = self.client.complete(content, Some(system_prompt)).await?;

        self.messages.push(ChatMessage::bot(reply.clone()));
        self.refresh_suggestions(system_prompt).await;

        Ok(Some(reply))
    }

    async fn refresh_suggestions(&mut self, system_prompt: &str) {
        let prompt = format!(
            "Based on this conversation about {}, provide 3 helpful follow-up questions or suggestions. Return only the suggestions as a JSON array.",
            self.mode.as_str()
        );

        match self.client.complete(&prompt, Some(system_prompt)).await {
            Ok(raw) => {
                if let Decoded::Structured(items) = decode_list::<String>(&raw) {
                    self.suggestions = items.into_iter().take(MAX_FOLLOW_UP_SUGGESTIONS).collect();
                }
            }
            Err(err) => {
                debug!(error = %err, "failed to generate follow-up suggestions, keeping defaults");
            }
        }
    }
}
