//! Session service layer
//!
//! `Session` is the facade owning all per-session state: the account
//! registry, the schedule store, the generated-post queue with its active
//! draft, and the engagement board. Every user action flows through here as
//! a synchronous mutation; the only deferred completion is the simulated
//! generation latency.
//!
//! A session is created at start, seeded from static data, and discarded on
//! teardown. Nothing survives the process.

pub mod events;

pub use events::{Event, EventBus, EventReceiver};

use std::collections::VecDeque;
use std::time::Duration;

use crate::accounts::AccountRegistry;
use crate::config::Config;
use crate::engagement::{CrmSink, DraftedReply, EngagementBoard};
use crate::error::Result;
use crate::generator::{ContentGenerator, GenerateRequest};
use crate::schedule::{ScheduleInput, ScheduleStore};
use crate::seed;
use crate::types::{Account, CommentThread, GeneratedPost, ScheduledPost};

/// Number of entries in the live-monitor digest
const DIGEST_LEN: usize = 3;

/// Per-session state container and operation surface
pub struct Session {
    registry: AccountRegistry,
    schedule: ScheduleStore,
    engagement: EngagementBoard,
    generator: ContentGenerator,
    /// Generated posts, newest first
    generated: VecDeque<GeneratedPost>,
    /// At most one generated post is the active draft at a time
    active_draft_id: Option<String>,
    event_bus: EventBus,
    generation_delay: Duration,
}

impl Session {
    /// Create a session seeded with the static dataset
    pub fn new(config: &Config) -> Self {
        let generator = match config.generation.seed {
            Some(seed) => ContentGenerator::with_seed(seed),
            None => ContentGenerator::new(),
        };

        Self {
            registry: AccountRegistry::new(seed::seed_accounts()),
            schedule: ScheduleStore::new(seed::seed_scheduled_posts()),
            engagement: EngagementBoard::new(seed::seed_comment_threads()),
            generator,
            generated: VecDeque::new(),
            active_draft_id: None,
            event_bus: EventBus::new(100),
            generation_delay: Duration::from_millis(config.generation.delay_ms),
        }
    }

    /// Assemble a session from explicit parts, mainly for tests
    pub fn from_parts(
        registry: AccountRegistry,
        schedule: ScheduleStore,
        engagement: EngagementBoard,
        generator: ContentGenerator,
        generation_delay: Duration,
    ) -> Self {
        Self {
            registry,
            schedule,
            engagement,
            generator,
            generated: VecDeque::new(),
            active_draft_id: None,
            event_bus: EventBus::new(100),
            generation_delay,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        self.registry.accounts()
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn schedule_store(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn engagement(&self) -> &EngagementBoard {
        &self.engagement
    }

    pub fn engagement_mut(&mut self) -> &mut EngagementBoard {
        &mut self.engagement
    }

    /// Generated posts, newest first
    pub fn generated_posts(&self) -> impl Iterator<Item = &GeneratedPost> {
        self.generated.iter()
    }

    /// The generated post currently staged for the planner, if any
    pub fn active_draft(&self) -> Option<&GeneratedPost> {
        let id = self.active_draft_id.as_deref()?;
        self.generated.iter().find(|p| p.id == id)
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    /// Flip an account in the selection set; the last selected account
    /// cannot be toggled off
    pub fn toggle_account_selection(&mut self, id: &str) -> bool {
        self.registry.toggle(id)
    }

    /// Generate a post after the simulated latency and stage it as the
    /// active draft
    ///
    /// The delay models the pending state of a remote generation call. It
    /// cannot be cancelled once started; this mirrors the observed behavior
    /// and is a known limitation.
    pub async fn generate(&mut self, request: GenerateRequest) -> GeneratedPost {
        self.event_bus.emit(Event::GenerationStarted {
            topic: request.topic.clone(),
            category: request.category.clone(),
        });

        tokio::time::sleep(self.generation_delay).await;

        let post = self.generator.generate(&request);
        tracing::info!(
            post_id = %post.id,
            score = post.engagement_score,
            "generated post staged as active draft"
        );
        self.accept_generated(post.clone());
        self.event_bus.emit(Event::GenerationCompleted {
            post_id: post.id.clone(),
            engagement_score: post.engagement_score,
        });
        post
    }

    /// Prepend a generated post to the queue and make it the active draft
    pub fn accept_generated(&mut self, post: GeneratedPost) {
        self.active_draft_id = Some(post.id.clone());
        self.generated.push_front(post);
    }

    /// Stage an already-queued post as the active draft without dequeuing it
    pub fn send_to_calendar(&mut self, post_id: &str) -> bool {
        if self.generated.iter().any(|p| p.id == post_id) {
            self.active_draft_id = Some(post_id.to_string());
            true
        } else {
            false
        }
    }

    /// Append a new scheduled post
    ///
    /// When the input carries no content id, the active draft (if any) is
    /// taken as the origin. If the consumed content id matches the active
    /// draft, that draft leaves the queue and the pointer is cleared.
    pub fn schedule_post(&mut self, mut input: ScheduleInput) -> ScheduledPost {
        if input.content_id.is_none() {
            input.content_id = self.active_draft_id.clone();
        }

        let post = self.schedule.schedule(input, &self.registry);

        if let (Some(draft_id), Some(content_id)) =
            (self.active_draft_id.as_deref(), post.content_id.as_deref())
        {
            if draft_id == content_id {
                self.generated.retain(|p| p.id != draft_id);
                self.active_draft_id = None;
            }
        }

        tracing::info!(post_id = %post.id, at = %post.scheduled_for, "post scheduled");
        self.event_bus.emit(Event::PostScheduled {
            post_id: post.id.clone(),
            platforms: post.platforms.clone(),
        });
        post
    }

    /// Threads visible for the current account selection, with the
    /// never-blank fallback
    pub fn visible_threads(&self) -> Vec<CommentThread> {
        self.engagement.visible_for(self.registry.selected_ids())
    }

    /// The first three pending posts ascending by time, for the live
    /// status summary
    pub fn activity_digest(&self) -> Vec<ScheduledPost> {
        self.schedule.upcoming().into_iter().take(DIGEST_LEN).collect()
    }

    /// Hand the current reply draft off to the CRM sink and clear it
    ///
    /// Fire-and-forget: no response payload is consumed.
    pub async fn mark_reply_drafted(&mut self, sink: &dyn CrmSink) -> Result<()> {
        let thread = match self.engagement.active_thread() {
            Some(t) => (t.id.clone(), t.account_id.clone()),
            None => return Ok(()),
        };
        let body = self.engagement.take_reply_draft();

        sink.mark_as_drafted(DraftedReply {
            thread_id: thread.0.clone(),
            account_id: thread.1,
            body,
        })
        .await?;

        self.event_bus.emit(Event::ReplyDrafted { thread_id: thread.0 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::NoopCrm;
    use crate::types::{Platform, PostStatus, Tone};
    use chrono::{Duration as ChronoDuration, Utc};

    fn test_session() -> Session {
        Session::from_parts(
            AccountRegistry::new(seed::seed_accounts()),
            ScheduleStore::new(seed::seed_scheduled_posts()),
            EngagementBoard::new(seed::seed_comment_threads()),
            ContentGenerator::with_seed(42),
            Duration::from_millis(0),
        )
    }

    fn generate_request() -> GenerateRequest {
        GenerateRequest {
            topic: "Micro habits for remote teams".to_string(),
            category: "wellness".to_string(),
            tone: Tone::Inspirational,
            platforms: vec![Platform::Instagram],
        }
    }

    fn schedule_input() -> ScheduleInput {
        ScheduleInput {
            content_id: None,
            account_ids: vec!["acct-ig-01".to_string()],
            platforms: vec![],
            scheduled_for: Utc::now() + ChronoDuration::hours(3),
            caption: "Caption".to_string(),
            hashtags: vec![],
            asset_prompt: String::new(),
        }
    }

    #[tokio::test]
    async fn test_generate_stages_active_draft() {
        let mut session = test_session();
        let post = session.generate(generate_request()).await;

        assert_eq!(session.active_draft().unwrap().id, post.id);
        assert_eq!(session.generated_posts().count(), 1);
    }

    #[tokio::test]
    async fn test_generated_queue_is_newest_first() {
        let mut session = test_session();
        let first = session.generate(generate_request()).await;
        let second = session.generate(generate_request()).await;

        let ids: Vec<&str> = session.generated_posts().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
        assert_eq!(session.active_draft().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_schedule_consumes_active_draft() {
        let mut session = test_session();
        let post = session.generate(generate_request()).await;

        let scheduled = session.schedule_post(schedule_input());

        assert_eq!(scheduled.content_id.as_deref(), Some(post.id.as_str()));
        assert!(session.active_draft().is_none());
        assert_eq!(session.generated_posts().count(), 0);
    }

    #[tokio::test]
    async fn test_schedule_without_draft_leaves_queue_untouched() {
        let mut session = test_session();
        let scheduled = session.schedule_post(schedule_input());

        assert!(scheduled.content_id.is_none());
        assert_eq!(session.schedule_store().len(), 3);
    }

    #[tokio::test]
    async fn test_send_to_calendar_restages_without_dequeue() {
        let mut session = test_session();
        let first = session.generate(generate_request()).await;
        let _second = session.generate(generate_request()).await;

        assert!(session.send_to_calendar(&first.id));
        assert_eq!(session.active_draft().unwrap().id, first.id);
        assert_eq!(session.generated_posts().count(), 2);

        assert!(!session.send_to_calendar("missing-id"));
    }

    #[tokio::test]
    async fn test_activity_digest_first_three_pending() {
        let mut session = test_session();
        for hours in [72, 6, 48, 96] {
            let mut input = schedule_input();
            input.scheduled_for = Utc::now() + ChronoDuration::hours(hours);
            session.schedule_post(input);
        }

        let digest = session.activity_digest();
        assert_eq!(digest.len(), 3);
        for pair in digest.windows(2) {
            assert!(pair[0].scheduled_for <= pair[1].scheduled_for);
        }
        for entry in &digest {
            assert_ne!(entry.status, PostStatus::Published);
        }
    }

    #[tokio::test]
    async fn test_visible_threads_follow_selection_with_fallback() {
        let mut session = test_session();
        // default selection covers threads 01 and 02
        assert_eq!(session.visible_threads().len(), 2);

        // narrow to the pinterest account only
        session.toggle_account_selection("acct-pin-03");
        session.toggle_account_selection("acct-ig-01");
        session.toggle_account_selection("acct-fb-02");
        let visible = session.visible_threads();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "thread-03");
    }

    #[tokio::test]
    async fn test_events_emitted_for_generation_and_scheduling() {
        let mut session = test_session();
        let mut events = session.subscribe();

        session.generate(generate_request()).await;
        session.schedule_post(schedule_input());

        assert!(matches!(
            events.recv().await.unwrap(),
            Event::GenerationStarted { .. }
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            Event::GenerationCompleted { .. }
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            Event::PostScheduled { .. }
        ));
    }

    #[tokio::test]
    async fn test_mark_reply_drafted_clears_draft() {
        let mut session = test_session();
        session.engagement_mut().select_thread("thread-02");
        session.engagement_mut().set_reply_draft("Yes, cashew ricotta works well.");

        session.mark_reply_drafted(&NoopCrm).await.unwrap();
        assert_eq!(session.engagement().reply_draft(), "");
    }
}
