use serde::{Deserialize, Serialize};

/// An AI-generated dashboard insight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub action: Option<String>,
    pub priority: InsightPriority,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Performance,
    Trend,
    #[default]
    Recommendation,
    Alert,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl Default for Insight {
    fn default() -> Self {
        Self {
            kind: InsightKind::default(),
            title: String::new(),
            description: String::new(),
            action: None,
            priority: InsightPriority::default(),
        }
    }
}
