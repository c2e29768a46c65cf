use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://delhihackathon.openai.azure.com";
const DEFAULT_DEPLOYMENT: &str = "gpt-4.1-mini";
const DEFAULT_API_VERSION: &str = "2025-01-01-preview";

pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
/// Older deployments exported the key under the Vite-prefixed name.
const LEGACY_API_KEY_ENV: &str = "VITE_AZURE_API_KEY";

/// Connection settings for the Azure OpenAI chat completions deployment.
///
/// Built explicitly (from the environment or literals) and handed to the
/// client at construction time, so tests can run several configurations
/// in one process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AzureAiConfig {
    /// Base URL of the Azure OpenAI resource
    pub endpoint: String,

    /// Deployment (model) name
    pub deployment: String,

    /// api-version query parameter
    pub api_version: String,

    /// API key; `None` means no call can succeed
    pub api_key: Option<String>,
}

/// Result of a configuration sanity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl Default for AzureAiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            deployment: DEFAULT_DEPLOYMENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
        }
    }
}

impl AzureAiConfig {
    /// Load configuration from environment variables, falling back to the
    /// fixed defaults for everything except the API key.
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or(
                "AZURE_OPENAI_ENDPOINT",
                DEFAULT_ENDPOINT,
            ),
            deployment: env_or("AZURE_OPENAI_DEPLOYMENT", DEFAULT_DEPLOYMENT),
            api_version: env_or("AZURE_OPENAI_API_VERSION", DEFAULT_API_VERSION),
            api_key: non_empty_env(LEGACY_API_KEY_ENV).or_else(|| non_empty_env(API_KEY_ENV)),
        }
    }

    /// Convenience constructor for tests and embedding callers.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Full chat-completions URL for this deployment.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    /// Check the configuration and report every problem found.
    pub fn check(&self) -> EnvReport {
        let mut issues = Vec::new();

        match &self.api_key {
            None => issues.push("Azure API key is not configured".to_string()),
            Some(key) if key.len() < 10 => {
                issues.push("Azure API key appears to be too short".to_string())
            }
            Some(_) => {}
        }

        if self.endpoint.trim().is_empty() {
            issues.push("Azure endpoint is not configured".to_string());
        }

        if self.deployment.trim().is_empty() {
            issues.push("Deployment name is not configured".to_string());
        }

        EnvReport {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    non_empty_env(name).unwrap_or_else(|| default.to_string())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AzureAiConfig::default();

        assert_eq!(config.endpoint, "https://delhihackathon.openai.azure.com");
        assert_eq!(config.deployment, "gpt-4.1-mini");
        assert_eq!(config.api_version, "2025-01-01-preview");
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_completions_url() {
        let config = AzureAiConfig::default();

        assert_eq!(
            config.completions_url(),
            "https://delhihackathon.openai.azure.com/openai/deployments/gpt-4.1-mini/chat/completions?api-version=2025-01-01-preview"
        );
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = AzureAiConfig {
            endpoint: "https://example.openai.azure.com/".to_string(),
            ..AzureAiConfig::default()
        };

        assert!(
            config
                .completions_url()
                .starts_with("https://example.openai.azure.com/openai/")
        );
    }

    #[test]
    fn test_check_without_key() {
        let report = AzureAiConfig::default().check();

        assert!(!report.is_valid);
        assert_eq!(report.issues, vec!["Azure API key is not configured"]);
    }

    #[test]
    fn test_check_with_short_key() {
        let report = AzureAiConfig::with_api_key("abc").check();

        assert!(!report.is_valid);
        assert_eq!(report.issues, vec!["Azure API key appears to be too short"]);
    }

    #[test]
    fn test_check_with_valid_key() {
        let report = AzureAiConfig::with_api_key("0123456789abcdef").check();

        assert!(report.is_valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_check_reports_all_issues() {
        let config = AzureAiConfig {
            endpoint: String::new(),
            deployment: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
        };

        let report = config.check();
        assert!(!report.is_valid);
        assert_eq!(report.issues.len(), 3);
    }
}
