//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Draft was empty or whitespace-only after trimming. Recovered locally:
    /// nothing is appended and no reply is scheduled.
    #[error("draft is empty")]
    EmptyDraft,

    /// Mutating call on a destroyed session. Rejected defensively; nothing
    /// downstream depends on it succeeding.
    #[error("session is closed")]
    SessionClosed,

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Navigation error: {0}")]
    Navigation(String),
}
