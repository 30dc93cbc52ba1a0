//! Scheduling store, calendar derivations, and time parsing
//!
//! The store is a plain append-only collection; callers re-sort through the
//! derivation methods, which are pure and restartable. The store does not
//! re-validate account ids or selection non-emptiness: the planner boundary
//! enforces those before handing input over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::accounts::AccountRegistry;
use crate::error::{PulsePilotError, Result};
use crate::types::{Platform, PostStatus, ScheduledPost};

/// Planner input for a new calendar entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Originating generated post, when promoting a draft
    pub content_id: Option<String>,
    pub account_ids: Vec<String>,
    /// Explicit platform override; when empty the union of the selected
    /// accounts' platforms is used
    pub platforms: Vec<Platform>,
    pub scheduled_for: DateTime<Utc>,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub asset_prompt: String,
}

/// In-memory collection of scheduled posts
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    posts: Vec<ScheduledPost>,
}

impl ScheduleStore {
    pub fn new(posts: Vec<ScheduledPost>) -> Self {
        Self { posts }
    }

    pub fn all(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The full calendar, ascending by scheduled time
    pub fn all_sorted(&self) -> Vec<ScheduledPost> {
        let mut sorted = self.posts.clone();
        sorted.sort_by_key(|p| p.scheduled_for);
        sorted
    }

    /// Pending entries ascending by scheduled time, excluding published
    /// posts. Pure derivation: repeated calls see the same view.
    pub fn upcoming(&self) -> Vec<ScheduledPost> {
        let mut pending: Vec<ScheduledPost> = self
            .posts
            .iter()
            .filter(|p| p.status != PostStatus::Published)
            .cloned()
            .collect();
        pending.sort_by_key(|p| p.scheduled_for);
        pending
    }

    /// Construct and append a new entry with status `scheduled`
    ///
    /// Platforms default to the union of the selected accounts' platforms
    /// when no explicit override is given. Append order is irrelevant;
    /// callers re-sort via `upcoming`.
    pub fn schedule(&mut self, input: ScheduleInput, registry: &AccountRegistry) -> ScheduledPost {
        let platforms = if input.platforms.is_empty() {
            registry.platforms_for(&input.account_ids)
        } else {
            input.platforms
        };

        let post = ScheduledPost::new(
            input.content_id,
            input.account_ids,
            platforms,
            input.scheduled_for,
            input.caption,
            input.hashtags,
            input.asset_prompt,
        );
        self.posts.push(post.clone());
        post
    }
}

/// Partition an ordered list into day buckets
///
/// Keys are short locale-style dates ("Tue, Aug 27"), emitted in first-seen
/// order; intra-bucket order is preserved from the input.
pub fn group_by_day(posts: &[ScheduledPost]) -> Vec<(String, Vec<ScheduledPost>)> {
    let mut buckets: Vec<(String, Vec<ScheduledPost>)> = Vec::new();
    for post in posts {
        let key = post.scheduled_for.format("%a, %b %-d").to_string();
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(post.clone()),
            None => buckets.push((key, vec![post.clone()])),
        }
    }
    buckets
}

/// Parse a human schedule string into a UTC timestamp
///
/// Supports relative durations ("45m", "2h", "1 day") and natural language
/// ("tomorrow", "next monday 10am").
///
/// # Errors
///
/// Returns `InvalidInput` when the string cannot be parsed in either form.
pub fn parse_when(input: &str) -> Result<DateTime<Utc>> {
    if input.is_empty() {
        return Err(PulsePilotError::InvalidInput(
            "Schedule string cannot be empty".to_string(),
        ));
    }

    if let Ok(std_duration) = humantime::parse_duration(input) {
        let seconds = std_duration.as_secs() as i64;
        let duration = chrono::Duration::try_seconds(seconds)
            .ok_or_else(|| PulsePilotError::InvalidInput("Duration out of range".to_string()))?;
        return Ok(Utc::now() + duration);
    }

    if let Ok(dt) = chrono_english::parse_date_string(input, Utc::now(), chrono_english::Dialect::Us)
    {
        return Ok(dt);
    }

    Err(PulsePilotError::InvalidInput(format!(
        "Could not parse schedule string: {}",
        input
    )))
}
