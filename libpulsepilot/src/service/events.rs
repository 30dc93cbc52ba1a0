//! Session event bus
//!
//! In-process broadcast of session activity for any interested surface
//! (console output, a future TUI). Emission is non-blocking: with no
//! subscribers the event is dropped, and lagging subscribers miss the
//! oldest events first.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Platform;

pub type EventReceiver = broadcast::Receiver<Event>;

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers, dropping it if nobody listens
    pub fn emit(&self, event: Event) {
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted by session operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A generation request was accepted and is pending
    GenerationStarted { topic: String, category: String },

    /// A generated post landed in the queue as the active draft
    GenerationCompleted {
        post_id: String,
        engagement_score: u8,
    },

    /// A post was appended to the schedule
    PostScheduled {
        post_id: String,
        platforms: Vec<Platform>,
    },

    /// A reply draft was handed off to the CRM sink
    ReplyDrafted { thread_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_and_receive() {
        let bus = EventBus::new(10);
        let mut receiver = bus.subscribe();

        bus.emit(Event::GenerationStarted {
            topic: "Micro habits".to_string(),
            category: "wellness".to_string(),
        });

        match receiver.recv().await.unwrap() {
            Event::GenerationStarted { topic, category } => {
                assert_eq!(topic, "Micro habits");
                assert_eq!(category, "wellness");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_noop() {
        let bus = EventBus::new(10);
        bus.emit(Event::ReplyDrafted {
            thread_id: "thread-01".to_string(),
        });
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_see_the_event() {
        let bus = EventBus::new(10);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.emit(Event::PostScheduled {
            post_id: "sched-xyz".to_string(),
            platforms: vec![Platform::Facebook],
        });

        assert!(matches!(a.recv().await.unwrap(), Event::PostScheduled { .. }));
        assert!(matches!(b.recv().await.unwrap(), Event::PostScheduled { .. }));
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = Event::GenerationCompleted {
            post_id: "gen-1".to_string(),
            engagement_score: 94,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("generation_completed"));
        assert!(json.contains("94"));
    }
}
