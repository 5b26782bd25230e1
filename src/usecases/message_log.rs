//! Append-only message log. The single ordered record of a chat session.
//!
//! Append is the only mutator; reads return snapshots. Ids come from a
//! monotonic counter allocated under the same lock as the push, so a user
//! send and a scheduled delivery landing back-to-back can never produce
//! out-of-order ids.

use crate::domain::{Message, MessageId, Sender};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};

/// Log entries plus the id counter they share a lock with.
#[derive(Debug, Default)]
struct LogState {
    entries: Vec<Message>,
    next_id: MessageId,
}

/// Append-only log for one session.
pub struct MessageLog {
    state: RwLock<LogState>,
    /// Bumped on every append; presentation layers watch this to re-render.
    revision: watch::Sender<u64>,
    /// Set on session teardown. A sealed log ignores all appends.
    sealed: AtomicBool,
}

impl MessageLog {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: RwLock::new(LogState::default()),
            revision,
            sealed: AtomicBool::new(false),
        }
    }

    /// Append a message and return its id, or `None` when the log has been
    /// sealed (the path a late scheduled delivery takes after teardown).
    pub async fn append(&self, sender: Sender, text: impl Into<String>) -> Option<MessageId> {
        if self.sealed.load(Ordering::Acquire) {
            return None;
        }
        let id = {
            let mut state = self.state.write().await;
            // Re-check under the lock: seal() holds the same lock, so after
            // it returns no append can slip through.
            if self.sealed.load(Ordering::Acquire) {
                return None;
            }
            let id = state.next_id;
            state.next_id += 1;
            state.entries.push(Message {
                id,
                text: text.into(),
                sender,
                created_at: Utc::now(),
            });
            id
        };
        self.revision.send_modify(|rev| *rev += 1);
        Some(id)
    }

    /// Read-only snapshot in append order. Never mutates.
    pub async fn all(&self) -> Vec<Message> {
        self.state.read().await.entries.clone()
    }

    /// Watch the append revision. Receivers see a change for every append.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Seal the log. Terminal: every later append is silently ignored.
    /// Takes the write lock so an in-flight append either completes fully
    /// before sealing or observes the seal and drops out.
    pub async fn seal(&self) {
        let _state = self.state.write().await;
        self.sealed.store(true, Ordering::Release);
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_allocates_increasing_ids() {
        let log = MessageLog::new();
        let a = log.append(Sender::Bot, "first").await.unwrap();
        let b = log.append(Sender::User, "second").await.unwrap();
        let c = log.append(Sender::Bot, "third").await.unwrap();
        assert!(a < b && b < c);

        let all = log.all().await;
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(all[1].text, "second");
    }

    #[tokio::test]
    async fn test_sealed_log_ignores_appends() {
        let log = MessageLog::new();
        log.append(Sender::Bot, "kept").await.unwrap();
        log.seal().await;
        assert!(log.append(Sender::User, "dropped").await.is_none());

        let all = log.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "kept");
    }

    #[tokio::test]
    async fn test_snapshot_is_independent_of_later_appends() {
        let log = MessageLog::new();
        log.append(Sender::Bot, "one").await;
        let snapshot = log.all().await;
        log.append(Sender::User, "two").await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_subscribe_sees_every_append() {
        let log = MessageLog::new();
        let mut rx = log.subscribe();
        let before = *rx.borrow_and_update();

        log.append(Sender::User, "hello").await;
        assert!(rx.has_changed().unwrap());
        let after = *rx.borrow_and_update();
        assert_eq!(after, before + 1);
    }
}
