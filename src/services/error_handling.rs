use thiserror::Error;

/// Failures of the Azure AI integration.
///
/// `Transport` and `Upstream` are distinct because a caller may want to
/// retry transport failures but not 4xx responses; this crate itself
/// performs no retry.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Azure AI request failed: {message}")]
    Transport { message: String },

    #[error("Azure AI API error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("No response choices from Azure AI")]
    EmptyResponse,
}

impl AiError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// User-friendly error messages for the dashboard's toast notifications.
pub struct UserErrorFormatter;

impl UserErrorFormatter {
    pub fn format_for_ui(error: &AiError) -> String {
        match error {
            AiError::Configuration { .. } => {
                "Azure AI is not configured. Please set your API key and try again.".to_string()
            }
            AiError::EmptyPrompt => "Please enter a message before sending.".to_string(),
            AiError::Transport { .. } => {
                "Could not reach the AI service. Please check your connection and try again."
                    .to_string()
            }
            // Surfaced verbatim-ish to aid debugging
            AiError::Upstream { .. } => error.to_string(),
            AiError::EmptyResponse => "No response from AI. Please try again.".to_string(),
        }
    }
}
