//! Chat session: one screen-lifetime of the medical assistant conversation.
//!
//! Owns the message log, the draft being composed, and the reply scheduler.
//! Destroying the session cancels pending replies and seals the log; a
//! destroyed session never mutates again.

use crate::domain::{DomainError, Message, MessageId, Sender};
use crate::usecases::message_log::MessageLog;
use crate::usecases::reply_scheduler::ReplyScheduler;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

/// Seed message every new session starts from.
pub const GREETING_TEXT: &str = "Hello! I'm your medical assistant. How can I help you today?";

/// Default delay before the automated reply is delivered.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

pub struct ChatSession {
    log: Arc<MessageLog>,
    scheduler: ReplyScheduler,
    /// Not-yet-sent text the user is composing. UI-facing state, never part
    /// of the log.
    draft: RwLock<String>,
    reply_delay: Duration,
    destroyed: AtomicBool,
}

impl ChatSession {
    /// Create an active session seeded with the greeting message.
    pub async fn new(reply_delay: Duration) -> Self {
        let log = Arc::new(MessageLog::new());
        let _ = log.append(Sender::Bot, GREETING_TEXT).await;
        let scheduler = ReplyScheduler::new(Arc::clone(&log));
        info!(
            delay_ms = reply_delay.as_millis() as u64,
            "chat session started"
        );
        Self {
            log,
            scheduler,
            draft: RwLock::new(String::new()),
            reply_delay,
            destroyed: AtomicBool::new(false),
        }
    }

    /// Validate and send the current draft.
    ///
    /// Trims the draft; a blank result is rejected with `EmptyDraft` and the
    /// draft is left unchanged. On success the user message is appended (and
    /// visible to `messages()`) before one delayed reply is scheduled, and
    /// the draft is cleared.
    pub async fn submit(&self) -> Result<MessageId, DomainError> {
        if self.destroyed.load(Ordering::Acquire) {
            return Err(DomainError::SessionClosed);
        }

        let text = {
            let mut draft = self.draft.write().await;
            let trimmed = draft.trim();
            if trimmed.is_empty() {
                return Err(DomainError::EmptyDraft);
            }
            let text = trimmed.to_string();
            draft.clear();
            text
        };

        // The user message must be in the log before the reply is scheduled,
        // so observers never see a reply without its trigger.
        let id = self
            .log
            .append(Sender::User, text)
            .await
            .ok_or(DomainError::SessionClosed)?;
        self.scheduler.schedule(self.reply_delay);
        debug!(id, "user message sent, reply scheduled");
        Ok(id)
    }

    /// Snapshot of the log in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.log.all().await
    }

    /// Watch the log revision; changes on every append.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.log.subscribe()
    }

    pub async fn draft(&self) -> String {
        self.draft.read().await.clone()
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        *self.draft.write().await = text.into();
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }

    /// Tear the session down: seal the log, then cancel pending replies.
    /// Idempotent. After this, `submit` is rejected and late deliveries are
    /// dropped by the sealed log.
    pub async fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.log.seal().await;
        self.scheduler.cancel_all();
        info!("chat session destroyed");
    }
}
