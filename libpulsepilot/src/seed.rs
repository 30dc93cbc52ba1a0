//! Static seed data loaded into every session at start
//!
//! Nothing here persists across process restarts; the timestamps are
//! offsets from "now" so the calendar and triage views always have
//! plausible content.

use chrono::{Duration, Utc};

use crate::types::{
    Account, Cadence, Comment, CommentThread, Platform, PostPerformance, PostStatus, Priority,
    ScheduledPost, Sentiment,
};

pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "acct-ig-01".to_string(),
            name: "GlowWell Studio".to_string(),
            handle: "@glowwell".to_string(),
            platform: Platform::Instagram,
            category: "wellness".to_string(),
            followers: 84_200,
            follower_change: 12.4,
            avg_engagement_rate: 5.8,
            posting_cadence: Cadence::High,
        },
        Account {
            id: "acct-fb-02".to_string(),
            name: "Urban Harvest Co.".to_string(),
            handle: "UrbanHarvestCo".to_string(),
            platform: Platform::Facebook,
            category: "food".to_string(),
            followers: 127_500,
            follower_change: 4.1,
            avg_engagement_rate: 3.2,
            posting_cadence: Cadence::Medium,
        },
        Account {
            id: "acct-pin-03".to_string(),
            name: "Vista Journeys".to_string(),
            handle: "@vistajourneys".to_string(),
            platform: Platform::Pinterest,
            category: "travel".to_string(),
            followers: 96_500,
            follower_change: 9.6,
            avg_engagement_rate: 7.1,
            posting_cadence: Cadence::Medium,
        },
    ]
}

pub fn seed_scheduled_posts() -> Vec<ScheduledPost> {
    let now = Utc::now();
    vec![
        ScheduledPost {
            id: "sched-001".to_string(),
            content_id: Some("generated-seed-1".to_string()),
            account_ids: vec!["acct-ig-01".to_string()],
            platforms: vec![Platform::Instagram, Platform::Facebook],
            scheduled_for: now,
            status: PostStatus::Scheduled,
            caption: "5 micro-habits to recalibrate your morning routine.".to_string(),
            hashtags: vec![
                "#HealthyHabits".to_string(),
                "#MorningMotivation".to_string(),
                "#WellnessRoutine".to_string(),
            ],
            asset_prompt: "Soft daylight, cozy morning setup with planner and herbal tea"
                .to_string(),
            performance: Some(PostPerformance {
                reach: 21_450,
                clicks: 483,
                comments: 62,
                saves: 310,
            }),
        },
        ScheduledPost {
            id: "sched-002".to_string(),
            content_id: Some("generated-seed-2".to_string()),
            account_ids: vec!["acct-pin-03".to_string()],
            platforms: vec![Platform::Pinterest],
            scheduled_for: now + Duration::days(1),
            status: PostStatus::Queued,
            caption:
                "Destination moodboard: 4-day itinerary through Barcelona's creative neighborhoods."
                    .to_string(),
            hashtags: vec![
                "#BarcelonaTravel".to_string(),
                "#CreativeEscapes".to_string(),
                "#CityExplorer".to_string(),
            ],
            asset_prompt: "Collage of Gothic Quarter, artisan markets, rooftop sunsets".to_string(),
            performance: None,
        },
    ]
}

pub fn seed_comment_threads() -> Vec<CommentThread> {
    let now = Utc::now();
    vec![
        CommentThread {
            id: "thread-01".to_string(),
            platform: Platform::Instagram,
            account_id: "acct-ig-01".to_string(),
            post_title: "Morning Rituals Carousel".to_string(),
            sentiment: Sentiment::Positive,
            priority: Priority::Medium,
            comments: vec![
                Comment {
                    id: "c-101".to_string(),
                    author: "@wellnesswarrior".to_string(),
                    message: "This carousel is fire! Tried the breathwork tip today and felt amazing."
                        .to_string(),
                    timestamp: now - Duration::minutes(32),
                    needs_reply: false,
                },
                Comment {
                    id: "c-102".to_string(),
                    author: "@habitstacking".to_string(),
                    message: "Would love to see a printable checklist version of this!".to_string(),
                    timestamp: now - Duration::minutes(61),
                    needs_reply: true,
                },
            ],
        },
        CommentThread {
            id: "thread-02".to_string(),
            platform: Platform::Facebook,
            account_id: "acct-fb-02".to_string(),
            post_title: "Farm-to-table recipe drop".to_string(),
            sentiment: Sentiment::Neutral,
            priority: Priority::High,
            comments: vec![
                Comment {
                    id: "c-201".to_string(),
                    author: "Carla Mendes".to_string(),
                    message: "Is there a vegan substitute for the goat cheese?".to_string(),
                    timestamp: now - Duration::minutes(14),
                    needs_reply: true,
                },
                Comment {
                    id: "c-202".to_string(),
                    author: "Marcus Alvarez".to_string(),
                    message: "Shared this with our cooking club. Great narrative!".to_string(),
                    timestamp: now - Duration::minutes(90),
                    needs_reply: false,
                },
            ],
        },
        CommentThread {
            id: "thread-03".to_string(),
            platform: Platform::Pinterest,
            account_id: "acct-pin-03".to_string(),
            post_title: "Barcelona creatives itinerary".to_string(),
            sentiment: Sentiment::Positive,
            priority: Priority::Low,
            comments: vec![Comment {
                id: "c-301".to_string(),
                author: "@citydaydream".to_string(),
                message: "Pinning this for our trip! Do you have a downloadable map?".to_string(),
                timestamp: now - Duration::minutes(240),
                needs_reply: true,
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_accounts_shape() {
        let accounts = seed_accounts();
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0].platform, Platform::Instagram);
        assert_eq!(accounts[1].platform, Platform::Facebook);
        assert_eq!(accounts[2].platform, Platform::Pinterest);
    }

    #[test]
    fn test_seed_thread_accounts_resolve() {
        let accounts = seed_accounts();
        for thread in seed_comment_threads() {
            assert!(
                accounts.iter().any(|a| a.id == thread.account_id),
                "thread {} references missing account {}",
                thread.id,
                thread.account_id
            );
        }
    }

    #[test]
    fn test_seed_scheduled_posts_accounts_resolve() {
        let accounts = seed_accounts();
        for post in seed_scheduled_posts() {
            for id in &post.account_ids {
                assert!(accounts.iter().any(|a| &a.id == id));
            }
            assert!(!post.platforms.is_empty());
        }
    }

    #[test]
    fn test_performance_only_on_metered_seed_entry() {
        let posts = seed_scheduled_posts();
        assert!(posts[0].performance.is_some());
        assert!(posts[1].performance.is_none());
    }
}
