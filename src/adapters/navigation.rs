//! Screen-stack navigation adapter. Implements NavigationPort.
//!
//! The app enters the chat screen on top of the dashboard; go_back pops it.

use crate::domain::DomainError;
use crate::ports::NavigationPort;
use std::sync::Mutex;
use tracing::info;

/// In-process back-stack of screen names.
pub struct ScreenStack {
    stack: Mutex<Vec<String>>,
}

impl ScreenStack {
    /// Start at the `root` screen.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(vec![root.into()]),
        }
    }

    /// Enter a screen (push on the stack).
    pub fn push(&self, screen: impl Into<String>) {
        self.stack
            .lock()
            .expect("screen stack lock")
            .push(screen.into());
    }

    /// Name of the screen currently on top.
    pub fn current(&self) -> Option<String> {
        self.stack.lock().expect("screen stack lock").last().cloned()
    }
}

#[async_trait::async_trait]
impl NavigationPort for ScreenStack {
    async fn go_back(&self) -> Result<(), DomainError> {
        let mut stack = self.stack.lock().expect("screen stack lock");
        if stack.len() <= 1 {
            return Err(DomainError::Navigation("already at root screen".into()));
        }
        let left = stack.pop().unwrap_or_default();
        let now = stack.last().cloned().unwrap_or_default();
        info!(from = %left, to = %now, "navigated back");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_go_back_pops_to_previous_screen() {
        let nav = ScreenStack::new("dashboard");
        nav.push("chat");
        nav.go_back().await.unwrap();
        assert_eq!(nav.current().as_deref(), Some("dashboard"));
    }

    #[tokio::test]
    async fn test_go_back_at_root_is_an_error() {
        let nav = ScreenStack::new("dashboard");
        assert!(nav.go_back().await.is_err());
        assert_eq!(nav.current().as_deref(), Some("dashboard"));
    }
}
