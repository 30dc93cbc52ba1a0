//! Core domain types for PulsePilot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social platforms a connected account can live on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Pinterest,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Pinterest => "pinterest",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "pinterest" => Ok(Self::Pinterest),
            _ => Err(format!(
                "Unknown platform: '{}'. Valid options: instagram, facebook, pinterest",
                s
            )),
        }
    }
}

/// Brand voice applied by the content generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Inspirational,
    Educational,
    Friendly,
    Bold,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inspirational => "inspirational",
            Self::Educational => "educational",
            Self::Friendly => "friendly",
            Self::Bold => "bold",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inspirational" => Ok(Self::Inspirational),
            "educational" => Ok(Self::Educational),
            "friendly" => Ok(Self::Friendly),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "Unknown tone: '{}'. Valid options: inspirational, educational, friendly, bold",
                s
            )),
        }
    }
}

/// Declared posting frequency tier of an account (informational only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Low,
    Medium,
    High,
}

/// A connected social account, seeded once at session start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub platform: Platform,
    pub category: String,
    pub followers: u64,
    /// 30-day follower change, signed percentage
    pub follower_change: f64,
    pub avg_engagement_rate: f64,
    pub posting_cadence: Cadence,
}

/// A generated content artifact awaiting promotion into a scheduled post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub id: String,
    pub topic: String,
    pub category: String,
    pub tone: Tone,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub image_prompt: String,
    pub recommended_platforms: Vec<Platform>,
    pub call_to_action: String,
    /// Synthetic 0-100 estimate of expected audience response
    pub engagement_score: u8,
}

/// Lifecycle status of a scheduled post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Queued,
    Scheduled,
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// Measured outcomes, present only once a post is published
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPerformance {
    pub reach: u64,
    pub clicks: u64,
    pub comments: u64,
    pub saves: u64,
}

/// A calendar entry produced by the planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: String,
    /// Originating generated post, if any. Weak reference: no cleanup is
    /// required when the source has left the queue.
    pub content_id: Option<String>,
    pub account_ids: Vec<String>,
    pub platforms: Vec<Platform>,
    pub scheduled_for: DateTime<Utc>,
    pub status: PostStatus,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub asset_prompt: String,
    pub performance: Option<PostPerformance>,
}

impl ScheduledPost {
    /// Create a freshly scheduled entry with a new unique id
    pub fn new(
        content_id: Option<String>,
        account_ids: Vec<String>,
        platforms: Vec<Platform>,
        scheduled_for: DateTime<Utc>,
        caption: String,
        hashtags: Vec<String>,
        asset_prompt: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content_id,
            account_ids,
            platforms,
            scheduled_for,
            status: PostStatus::Scheduled,
            caption,
            hashtags,
            asset_prompt,
            performance: None,
        }
    }
}

/// Aggregate mood of a comment thread
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Triage priority of a comment thread
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single audience comment inside a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub needs_reply: bool,
}

/// A conversation under one post, owned by a connected account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub platform: Platform,
    pub account_id: String,
    pub post_title: String,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Number of comments still flagged as needing a reply
    pub fn replies_needed(&self) -> usize {
        self.comments.iter().filter(|c| c.needs_reply).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for (s, p) in [
            ("instagram", Platform::Instagram),
            ("facebook", Platform::Facebook),
            ("pinterest", Platform::Pinterest),
        ] {
            assert_eq!(s.parse::<Platform>().unwrap(), p);
            assert_eq!(p.to_string(), s);
        }
    }

    #[test]
    fn test_platform_parse_unknown() {
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serde_lowercase() {
        let json = serde_json::to_string(&Platform::Pinterest).unwrap();
        assert_eq!(json, r#""pinterest""#);
        let back: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Platform::Pinterest);
    }

    #[test]
    fn test_tone_parse_case_insensitive() {
        assert_eq!("Bold".parse::<Tone>().unwrap(), Tone::Bold);
        assert!("ominous".parse::<Tone>().is_err());
    }

    #[test]
    fn test_post_status_serde() {
        let json = serde_json::to_string(&PostStatus::Published).unwrap();
        assert_eq!(json, r#""published""#);
    }

    #[test]
    fn test_scheduled_post_new_defaults() {
        let post = ScheduledPost::new(
            Some("gen-1".to_string()),
            vec!["acct-ig-01".to_string()],
            vec![Platform::Instagram],
            Utc::now(),
            "Caption".to_string(),
            vec!["#HealthyHabits".to_string()],
            "Soft daylight".to_string(),
        );

        assert!(Uuid::parse_str(&post.id).is_ok());
        assert_eq!(post.status, PostStatus::Scheduled);
        assert!(post.performance.is_none());
    }

    #[test]
    fn test_scheduled_post_unique_ids() {
        let mk = || {
            ScheduledPost::new(
                None,
                vec![],
                vec![Platform::Facebook],
                Utc::now(),
                String::new(),
                vec![],
                String::new(),
            )
        };
        assert_ne!(mk().id, mk().id);
    }

    #[test]
    fn test_replies_needed_count() {
        let thread = CommentThread {
            id: "t".to_string(),
            platform: Platform::Instagram,
            account_id: "acct-ig-01".to_string(),
            post_title: "Title".to_string(),
            sentiment: Sentiment::Positive,
            priority: Priority::Low,
            comments: vec![
                Comment {
                    id: "c1".to_string(),
                    author: "@a".to_string(),
                    message: "hi".to_string(),
                    timestamp: Utc::now(),
                    needs_reply: true,
                },
                Comment {
                    id: "c2".to_string(),
                    author: "@b".to_string(),
                    message: "ok".to_string(),
                    timestamp: Utc::now(),
                    needs_reply: false,
                },
            ],
        };
        assert_eq!(thread.replies_needed(), 1);
    }

    #[test]
    fn test_scheduled_post_serialization() {
        let post = ScheduledPost::new(
            None,
            vec!["acct-fb-02".to_string()],
            vec![Platform::Facebook],
            Utc::now(),
            "Recipe drop".to_string(),
            vec!["#ChefMode".to_string()],
            "Collage".to_string(),
        );

        let json = serde_json::to_string(&post).unwrap();
        let back: ScheduledPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.platforms, post.platforms);
        assert_eq!(back.status, post.status);
    }
}
