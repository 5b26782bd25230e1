//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Navigation collaborator. Invoked only in response to an explicit user
/// action (the back button), never as a side effect of message flow.
#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    /// Leave the current screen and return to the previous one.
    async fn go_back(&self) -> Result<(), DomainError>;
}
