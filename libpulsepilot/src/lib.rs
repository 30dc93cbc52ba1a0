//! PulsePilot - session core for a social media management console
//!
//! This library holds the in-memory state and business logic behind the
//! PulsePilot dashboard: connected-account summaries, table-driven content
//! generation, a scheduling calendar, and comment triage. Everything is
//! session-scoped; nothing persists across process restarts.

pub mod accounts;
pub mod config;
pub mod engagement;
pub mod error;
pub mod generator;
pub mod logging;
pub mod schedule;
pub mod seed;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use accounts::AccountRegistry;
pub use config::Config;
pub use engagement::{CrmSink, DraftedReply, EngagementBoard, NoopCrm};
pub use error::{PulsePilotError, Result};
pub use generator::{ContentGenerator, GenerateRequest};
pub use schedule::{group_by_day, parse_when, ScheduleInput, ScheduleStore};
pub use service::{Event, Session};
pub use types::{
    Account, Comment, CommentThread, GeneratedPost, Platform, PostStatus, ScheduledPost, Tone,
};
