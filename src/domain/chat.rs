use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One turn in an assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatMessage {
    pub fn new(sender: ChatSender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatSender::User, content)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(ChatSender::Bot, content)
    }
}

/// The assistant persona the chat dialog was opened with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Create,
    Trends,
    Schedule,
}

impl ChatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Trends => "trends",
            Self::Schedule => "schedule",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Content Creation Assistant",
            Self::Trends => "Trend Analysis Assistant",
            Self::Schedule => "Post Scheduling Assistant",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Create => {
                "You are an expert content creation assistant for social media. You help creators brainstorm ideas, write engaging content, generate hashtags, and optimize posts for maximum engagement. Be creative, specific, and actionable in your responses."
            }
            Self::Trends => {
                "You are a trend analysis expert for social media. You help creators identify trending topics, analyze hashtag performance, discover viral opportunities, and predict upcoming trends. Provide data-driven insights and actionable recommendations."
            }
            Self::Schedule => {
                "You are a social media scheduling expert. You help creators optimize posting times, create content calendars, analyze performance patterns, and plan strategic content schedules. Focus on timing optimization and scheduling strategies."
            }
        }
    }

    pub fn welcome_message(&self) -> &'static str {
        match self {
            Self::Create => {
                "Hello! I'm your AI content creation assistant. I can help you brainstorm ideas, write content, and optimize your posts. What type of content would you like to create today?"
            }
            Self::Trends => {
                "Hi! I'm your trend analysis assistant. I can help you identify trending topics, analyze hashtags, and discover viral opportunities. What trends would you like to explore?"
            }
            Self::Schedule => {
                "Hello! I'm your scheduling assistant. I can help you optimize posting times, create schedules, and plan your content calendar. How can I help with your scheduling?"
            }
        }
    }

    pub fn starter_suggestions(&self) -> Vec<String> {
        let suggestions: &[&str] = match self {
            Self::Create => &[
                "I need content ideas for fitness",
                "Help me write a caption for my latest post",
                "Generate hashtags for lifestyle content",
                "Create a content calendar for this week",
            ],
            Self::Trends => &[
                "What's trending in fitness right now?",
                "Analyze trending hashtags in my niche",
                "Find viral content opportunities",
                "Predict upcoming trends",
            ],
            Self::Schedule => &[
                "What's the best time to post today?",
                "Create a posting schedule for this week",
                "Optimize my content calendar",
                "Analyze my best performing times",
            ],
        };
        suggestions.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("hello");
        assert_eq!(user.sender, ChatSender::User);
        assert_eq!(user.content, "hello");

        let bot = ChatMessage::bot("hi there");
        assert_eq!(bot.sender, ChatSender::Bot);
        assert_ne!(user.id, bot.id);
    }

    #[test]
    fn test_each_mode_has_distinct_prompts() {
        let modes = [ChatMode::Create, ChatMode::Trends, ChatMode::Schedule];
        for (i, a) in modes.iter().enumerate() {
            for b in modes.iter().skip(i + 1) {
                assert_ne!(a.system_prompt(), b.system_prompt());
                assert_ne!(a.welcome_message(), b.welcome_message());
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn test_starter_suggestions_count() {
        assert_eq!(ChatMode::Create.starter_suggestions().len(), 4);
        assert_eq!(ChatMode::Trends.starter_suggestions().len(), 4);
        assert_eq!(ChatMode::Schedule.starter_suggestions().len(), 4);
    }
}
