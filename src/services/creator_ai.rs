use tracing::{error, info};

use crate::domain::insight::Insight;
use crate::domain::suggestion::ContentSuggestion;
use crate::services::azure_ai::AzureAiClient;
use crate::services::error_handling::AiError;
use crate::services::normalize::{decode_list, excerpt};

/// Characters of raw model prose kept when a fallback record embeds it.
const FALLBACK_EXCERPT_LEN: usize = 200;

const CONNECTION_PROBE_PROMPT: &str =
    "Hello, please respond with 'Azure AI is working correctly' if you can see this message.";
const CONNECTION_PROBE_PHRASE: &str = "Azure AI is working correctly";

/// Creator-facing AI operations: content ideas, dashboard insights,
/// hashtag suggestions, and performance analysis.
///
/// Every operation is one `complete` call followed by normalization;
/// interpretation failures degrade to a deterministic fallback record,
/// while transport/upstream/configuration failures propagate unchanged.
#[derive(Clone)]
pub struct CreatorAiService {
    client: AzureAiClient,
}

impl CreatorAiService {
    pub fn new(client: AzureAiClient) -> Self {
        Self { client }
    }

    /// Generate content ideas for a domain/platform pair.
    pub async fn generate_content_suggestions(
        &self,
        domain: &str,
        platform: &str,
    ) -> Result<Vec<ContentSuggestion>, AiError> {
        let prompt = format!(
            "Generate 3 creative content ideas for the {domain} domain on {platform}.\n\
             For each idea, provide:\n\
             - A catchy title\n\
             - A brief description (2-3 sentences)\n\
             - 3-5 relevant hashtags\n\
             - Estimated views range (e.g., \"100K-200K\")\n\
             - Engagement prediction percentage (5-15%)\n\
             - Optimal posting time (day and time)\n\n\
             Format the response as a JSON array with these fields: title, description, hashtags, platforms, estimatedViews, engagementPrediction, optimalTime."
        );
        let system_message = "You are a content strategy expert. Generate innovative, engaging content ideas that are tailored to specific platforms and domains. Focus on trending topics and viral potential.";

        let response = self.client.complete(&prompt, Some(system_message)).await?;

        let mut suggestions =
            decode_list::<ContentSuggestion>(&response).or_fallback(|raw| {
                vec![ContentSuggestion {
                    title: format!("AI-Generated {domain} Content"),
                    description: excerpt(raw, FALLBACK_EXCERPT_LEN),
                    hashtags: vec![
                        format!("#{domain}"),
                        "#ContentCreation".to_string(),
                        "#SocialMedia".to_string(),
                    ],
                    platforms: vec![platform.to_string()],
                    ..ContentSuggestion::default()
                }]
            });

        // A suggestion with no platform defaults to the one requested
        for suggestion in &mut suggestions {
            if suggestion.platforms.is_empty() {
                suggestion.platforms = vec![platform.to_string()];
            }
        }

        Ok(suggestions)
    }

    /// Generate actionable dashboard insights.
    pub async fn generate_insights(&self) -> Result<Vec<Insight>, AiError> {
        let prompt = "Analyze the current content creator landscape and provide 3-5 actionable insights.\n\
             Focus on:\n\
             - Performance trends\n\
             - Content opportunities\n\
             - Platform-specific recommendations\n\
             - Emerging trends\n\n\
             For each insight, provide:\n\
             - Type (performance, trend, recommendation, or alert)\n\
             - Title\n\
             - Description\n\
             - Priority (low, medium, or high)\n\
             - Optional action item\n\n\
             Format as JSON array with fields: type, title, description, action, priority.";
        let system_message = "You are a social media analytics expert. Provide data-driven insights that help content creators improve their performance and stay ahead of trends.";

        let response = self.client.complete(prompt, Some(system_message)).await?;

        Ok(decode_list::<Insight>(&response).or_fallback(|raw| {
            vec![Insight {
                title: "AI-Powered Content Optimization".to_string(),
                description: excerpt(raw, FALLBACK_EXCERPT_LEN),
                ..Insight::default()
            }]
        }))
    }

    /// Generate hashtags for a piece of content; entries that do not start
    /// with `#` are dropped, not repaired.
    pub async fn generate_hashtag_suggestions(
        &self,
        content: &str,
        platform: &str,
    ) -> Result<Vec<String>, AiError> {
        let prompt = format!(
            "Generate 5-8 relevant hashtags for this content on {platform}: \"{content}\"\n\n\
             Consider:\n\
             - Platform-specific hashtag trends\n\
             - Content relevance\n\
             - Viral potential\n\
             - Mix of popular and niche hashtags\n\n\
             Return only the hashtags as a JSON array."
        );
        let system_message = "You are a hashtag optimization expert. Generate hashtags that maximize reach and engagement while staying relevant to the content.";

        let response = self.client.complete(&prompt, Some(system_message)).await?;

        let hashtags = decode_list::<String>(&response).or_fallback(|_| {
            vec![
                "#ContentCreation".to_string(),
                "#SocialMedia".to_string(),
                "#Trending".to_string(),
            ]
        });

        Ok(hashtags
            .into_iter()
            .filter(|tag| tag.starts_with('#'))
            .collect())
    }

    /// Analyze content performance data; free-text result, no
    /// normalization.
    pub async fn analyze_content_performance(
        &self,
        content_data: &serde_json::Value,
    ) -> Result<String, AiError> {
        let prompt = format!(
            "Analyze this content performance data and provide actionable recommendations:\n\n\
             Content Data: {}\n\n\
             Provide insights on:\n\
             - What's working well\n\
             - Areas for improvement\n\
             - Specific recommendations\n\
             - Trend analysis\n\n\
             Keep the response concise and actionable (2-3 paragraphs).",
            serde_json::to_string_pretty(content_data).unwrap_or_else(|_| content_data.to_string())
        );
        let system_message = "You are a content performance analyst. Provide data-driven insights and actionable recommendations to improve content performance.";

        self.client.complete(&prompt, Some(system_message)).await
    }

    /// Probe the deployment with a canned prompt. Any failure is reported
    /// as `false`, never as an error.
    pub async fn test_connection(&self) -> bool {
        info!("testing Azure AI connection");
        match self
            .client
            .complete(
                CONNECTION_PROBE_PROMPT,
                Some("You are a helpful assistant. Respond briefly and directly."),
            )
            .await
        {
            Ok(response) => {
                info!(reply_len = response.len(), "Azure AI connection test reply received");
                response.contains(CONNECTION_PROBE_PHRASE) || !response.is_empty()
            }
            Err(err) => {
                error!(error = %err, "Azure AI connection test failed");
                false
            }
        }
    }
}
