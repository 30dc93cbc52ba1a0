//! Comment triage board and the outbound CRM hook
//!
//! Threads are static per session. The board tracks which thread is open in
//! the detail view and holds the unsent reply draft, which is ephemeral UI
//! state and never attached to the thread entity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CommentThread;

/// A reply handed off to an external CRM
///
/// The CRM contract is fire-and-forget: the payload is accepted and no
/// response is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftedReply {
    pub thread_id: String,
    pub account_id: String,
    pub body: String,
}

/// Outbound hand-off for drafted replies
///
/// The real synchronization protocol is unspecified; implementations accept
/// the payload and may do nothing with it.
#[async_trait]
pub trait CrmSink: Send + Sync {
    async fn mark_as_drafted(&self, reply: DraftedReply) -> Result<()>;
}

/// Default sink that accepts and discards every payload
pub struct NoopCrm;

#[async_trait]
impl CrmSink for NoopCrm {
    async fn mark_as_drafted(&self, reply: DraftedReply) -> Result<()> {
        tracing::debug!(thread_id = %reply.thread_id, "reply draft discarded (no CRM configured)");
        Ok(())
    }
}

/// Static thread list plus triage view state
#[derive(Debug, Clone)]
pub struct EngagementBoard {
    threads: Vec<CommentThread>,
    active_thread_id: Option<String>,
    reply_draft: String,
}

impl EngagementBoard {
    pub fn new(threads: Vec<CommentThread>) -> Self {
        Self {
            threads,
            active_thread_id: None,
            reply_draft: String::new(),
        }
    }

    pub fn threads(&self) -> &[CommentThread] {
        &self.threads
    }

    /// Threads owned by one of the given accounts, strictly filtered
    pub fn filter_by_accounts(&self, account_ids: &[String]) -> Vec<&CommentThread> {
        self.threads
            .iter()
            .filter(|t| account_ids.iter().any(|id| *id == t.account_id))
            .collect()
    }

    /// Threads for the triage panel, with the never-blank fallback: when the
    /// account filter matches nothing, the full list is shown instead.
    pub fn visible_for(&self, account_ids: &[String]) -> Vec<CommentThread> {
        let filtered = self.filter_by_accounts(account_ids);
        if filtered.is_empty() {
            self.threads.clone()
        } else {
            filtered.into_iter().cloned().collect()
        }
    }

    /// Open a thread in the detail view
    pub fn select_thread(&mut self, id: &str) {
        self.active_thread_id = Some(id.to_string());
    }

    /// The thread currently open in the detail view, defaulting to the
    /// first thread when nothing has been selected yet
    pub fn active_thread(&self) -> Option<&CommentThread> {
        self.active_thread_id
            .as_deref()
            .and_then(|id| self.threads.iter().find(|t| t.id == id))
            .or_else(|| self.threads.first())
    }

    pub fn set_reply_draft(&mut self, text: impl Into<String>) {
        self.reply_draft = text.into();
    }

    pub fn reply_draft(&self) -> &str {
        &self.reply_draft
    }

    /// Drain the reply draft, leaving the field empty
    pub fn take_reply_draft(&mut self) -> String {
        std::mem::take(&mut self.reply_draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_comment_threads;

    fn board() -> EngagementBoard {
        EngagementBoard::new(seed_comment_threads())
    }

    #[test]
    fn test_filter_by_accounts_strict() {
        let board = board();
        let threads = board.filter_by_accounts(&["acct-fb-02".to_string()]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].id, "thread-02");
    }

    #[test]
    fn test_visible_for_falls_back_when_filter_is_empty() {
        let board = board();
        let visible = board.visible_for(&["acct-none".to_string()]);
        assert_eq!(visible.len(), 3, "blank panel is never shown");
    }

    #[test]
    fn test_visible_for_matches_selection() {
        let board = board();
        let visible = board.visible_for(&["acct-ig-01".to_string(), "acct-pin-03".to_string()]);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_active_thread_defaults_to_first() {
        let board = board();
        assert_eq!(board.active_thread().unwrap().id, "thread-01");
    }

    #[test]
    fn test_select_thread_changes_detail_view() {
        let mut board = board();
        board.select_thread("thread-03");
        assert_eq!(board.active_thread().unwrap().id, "thread-03");
    }

    #[test]
    fn test_select_unknown_thread_falls_back_to_first() {
        let mut board = board();
        board.select_thread("thread-99");
        assert_eq!(board.active_thread().unwrap().id, "thread-01");
    }

    #[test]
    fn test_reply_draft_is_ephemeral_state() {
        let mut board = board();
        board.set_reply_draft("Thanks! A printable version is coming next week.");
        assert_eq!(
            board.reply_draft(),
            "Thanks! A printable version is coming next week."
        );
        let taken = board.take_reply_draft();
        assert!(!taken.is_empty());
        assert_eq!(board.reply_draft(), "");
    }

    #[tokio::test]
    async fn test_noop_crm_accepts_payload() {
        let sink = NoopCrm;
        let result = sink
            .mark_as_drafted(DraftedReply {
                thread_id: "thread-01".to_string(),
                account_id: "acct-ig-01".to_string(),
                body: "On it!".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }
}
