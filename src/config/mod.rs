mod azure_ai_config;

pub use azure_ai_config::{API_KEY_ENV, AzureAiConfig, EnvReport};
