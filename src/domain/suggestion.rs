use serde::{Deserialize, Serialize};

/// A single AI-generated content idea.
///
/// Wire names are camelCase because that is what the model is prompted to
/// emit. Missing fields take the documented defaults at decode time;
/// present fields pass through unmodified. `engagement_prediction` is
/// deliberately not clamped to the 5-15% range the prompt asks for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSuggestion {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    pub platforms: Vec<String>,
    pub estimated_views: String,
    pub engagement_prediction: f64,
    pub optimal_time: String,
}

impl Default for ContentSuggestion {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            hashtags: Vec::new(),
            platforms: Vec::new(),
            estimated_views: "50K-100K".to_string(),
            engagement_prediction: 8.0,
            optimal_time: "Monday 7:00 PM EST".to_string(),
        }
    }
}
