//! Domain entities. Pure data structures for the core business.
//!
//! No UI/scheduler types here — these are produced by the session and
//! consumed through ports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message identity. Allocated from a per-session monotonic counter, so
/// allocation order is log order even when two messages land in the same
/// clock tick.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable once appended to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
}
