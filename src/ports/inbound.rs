//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the presentation layer drives one chat session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive chat screen until the user leaves it.
    /// The implementation owns teardown of the session on exit.
    async fn run_chat(&self) -> Result<(), DomainError>;
}
