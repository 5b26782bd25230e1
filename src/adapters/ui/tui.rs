//! Implements InputPort. Interactive chat screen for one session.
//!
//! Renders log snapshots as styled lines, prompts for the draft with
//! inquire, and shows a typing indicator while the scheduled reply is
//! pending. Leaving the screen (back command or ESC) notifies the
//! navigation collaborator and destroys the session.

use crate::domain::{DomainError, Message, Sender};
use crate::ports::{InputPort, NavigationPort};
use crate::usecases::ChatSession;
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{InquireError, Text};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::warn;

/// Typed instead of a back button.
const BACK_COMMAND: &str = "/back";

/// Applies the clinic theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let mut config = RenderConfig::default_colored();
    config.prompt_prefix = Styled::new("›").with_fg(PromptColor::DarkCyan);
    config.answered_prompt_prefix = Styled::new("›").with_fg(PromptColor::DarkGreen);
    inquire::set_global_render_config(config);
}

/// Terminal chat screen. Drives one ChatSession.
pub struct ChatScreen {
    session: Arc<ChatSession>,
    nav: Arc<dyn NavigationPort>,
    dump_transcript: bool,
}

impl ChatScreen {
    pub fn new(
        session: Arc<ChatSession>,
        nav: Arc<dyn NavigationPort>,
        dump_transcript: bool,
    ) -> Self {
        Self {
            session,
            nav,
            dump_transcript,
        }
    }

    fn print_message(msg: &Message) {
        let stamp = format!("[{}]", msg.created_at.format("%H:%M"));
        match msg.sender {
            Sender::Bot => println!(
                "{} {} {}",
                stamp.dark_grey(),
                "assistant ›".dark_cyan().bold(),
                msg.text
            ),
            Sender::User => println!(
                "{} {} {}",
                stamp.dark_grey(),
                "      you ›".dark_green().bold(),
                msg.text
            ),
        }
    }

    /// Print log entries past `printed` and advance the cursor.
    async fn print_new(&self, printed: &mut usize) {
        let all = self.session.messages().await;
        for msg in all.iter().skip(*printed) {
            Self::print_message(msg);
        }
        *printed = all.len();
    }

    /// Spin until the log grows past `printed` (the reply landing) or a
    /// grace period of twice the reply delay runs out.
    async fn wait_for_reply(&self, rx: &mut watch::Receiver<u64>, printed: usize) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("spinner template"),
        );
        spinner.set_message("assistant is typing...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let deadline = tokio::time::Instant::now()
            + self.session.reply_delay() * 2
            + Duration::from_millis(250);
        loop {
            if self.session.messages().await.len() > printed {
                break;
            }
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            match tokio::time::timeout(remaining, rx.changed()).await {
                Ok(Ok(())) => continue,
                // Timed out or the session was torn down under us.
                _ => break,
            }
        }
        spinner.finish_and_clear();
    }

    async fn leave_screen(&self) {
        if let Err(e) = self.nav.go_back().await {
            warn!(error = %e, "navigation failed on exit");
        }
        if self.dump_transcript {
            let transcript = self.session.messages().await;
            match serde_json::to_string_pretty(&transcript) {
                Ok(json) => println!("{json}"),
                Err(e) => warn!(error = %e, "transcript serialization failed"),
            }
        }
        self.session.destroy().await;
    }
}

#[async_trait]
impl InputPort for ChatScreen {
    async fn run_chat(&self) -> Result<(), DomainError> {
        println!();
        println!("{}", "Medical Assistant".dark_cyan().bold());
        println!(
            "{}",
            format!("Type a message and press enter. {BACK_COMMAND} or ESC returns to the previous screen.")
                .dark_grey()
        );
        println!();

        let mut rx = self.session.subscribe();
        let mut printed = 0usize;
        self.print_new(&mut printed).await;

        loop {
            let line = match Text::new("you:").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => {
                    self.leave_screen().await;
                    return Err(DomainError::Ui(e.to_string()));
                }
            };

            if line.trim() == BACK_COMMAND {
                break;
            }

            self.session.set_draft(line).await;
            match self.session.submit().await {
                Ok(_) => {
                    self.print_new(&mut printed).await;
                    self.wait_for_reply(&mut rx, printed).await;
                    self.print_new(&mut printed).await;
                }
                Err(DomainError::EmptyDraft) => {
                    println!("{}", "Nothing to send. Type a message first.".dark_grey());
                }
                Err(e) => {
                    self.leave_screen().await;
                    return Err(e);
                }
            }
        }

        self.leave_screen().await;
        Ok(())
    }
}
