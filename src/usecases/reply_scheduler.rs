//! One-shot delayed delivery of the automated reply.
//!
//! Schedule once, deliver once, cancellable before delivery. Pending replies
//! are independent: each send gets its own timer and none supersede earlier
//! ones. A cancelled or never-fired reply is a normal outcome, not an error —
//! no retries, no backoff.

use crate::domain::Sender;
use crate::usecases::message_log::MessageLog;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

/// Fixed reply delivered for every user message.
pub const AUTO_REPLY_TEXT: &str = "Thank you for your message. A healthcare professional will respond shortly. For emergencies, please use the SOS button.";

/// Handle to one scheduled reply, independent of all others.
#[derive(Clone)]
pub struct ReplyHandle {
    inner: AbortHandle,
}

impl ReplyHandle {
    /// Cancel this reply if it has not fired yet. No-op after delivery.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Whether the delivery task already ran to completion or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

/// Schedules delayed bot replies against a session's log.
pub struct ReplyScheduler {
    log: Arc<MessageLog>,
    /// Abort handles for replies scheduled so far. Finished ones are pruned
    /// on the next schedule call.
    pending: Mutex<Vec<AbortHandle>>,
}

impl ReplyScheduler {
    pub fn new(log: Arc<MessageLog>) -> Self {
        Self {
            log,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Arrange one delayed delivery of the fixed reply. Fires at most once;
    /// cancellation or a sealed log before the delay elapses suppresses it.
    pub fn schedule(&self, delay: Duration) -> ReplyHandle {
        let log = Arc::clone(&self.log);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match log.append(Sender::Bot, AUTO_REPLY_TEXT).await {
                Some(id) => debug!(id, "auto reply delivered"),
                None => debug!("auto reply dropped, log sealed"),
            }
        });

        let handle = task.abort_handle();
        let mut pending = self.pending.lock().expect("pending replies lock");
        pending.retain(|h| !h.is_finished());
        pending.push(handle.clone());
        ReplyHandle { inner: handle }
    }

    /// Cancel every reply that has not fired yet. Already-delivered replies
    /// are unaffected; cancelling them again is a no-op.
    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().expect("pending replies lock");
        for handle in pending.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn scheduler() -> (Arc<MessageLog>, ReplyScheduler) {
        let log = Arc::new(MessageLog::new());
        let scheduler = ReplyScheduler::new(Arc::clone(&log));
        (log, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_delivers_fixed_reply_after_delay() {
        let (log, scheduler) = scheduler();
        let handle = scheduler.schedule(DELAY);

        assert!(log.all().await.is_empty());
        assert!(!handle.is_finished());

        tokio::time::sleep(DELAY + Duration::from_millis(50)).await;

        let all = log.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].sender, Sender::Bot);
        assert_eq!(all[0].text, AUTO_REPLY_TEXT);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_pending_deliveries() {
        let (log, scheduler) = scheduler();
        scheduler.schedule(DELAY);
        scheduler.schedule(DELAY);
        scheduler.cancel_all();

        tokio::time::sleep(DELAY * 3).await;
        assert!(log.all().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_delivery_is_noop() {
        let (log, scheduler) = scheduler();
        let handle = scheduler.schedule(DELAY);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(log.all().await.len(), 1);

        handle.cancel();
        scheduler.cancel_all();
        assert_eq!(log.all().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_cancels_one_reply_without_touching_others() {
        let (log, scheduler) = scheduler();
        let first = scheduler.schedule(DELAY);
        scheduler.schedule(DELAY);
        first.cancel();

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(log.all().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_schedule_gets_its_own_delivery() {
        let (log, scheduler) = scheduler();
        scheduler.schedule(DELAY);
        scheduler.schedule(DELAY);
        scheduler.schedule(DELAY);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(log.all().await.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sealed_log_drops_delivery() {
        let (log, scheduler) = scheduler();
        scheduler.schedule(DELAY);
        log.seal().await;

        tokio::time::sleep(DELAY * 2).await;
        assert!(log.all().await.is_empty());
    }
}
