//! Wiring & DI. Entry point: bootstrap context, build session and adapters,
//! run the chat screen. No business logic here.

use dotenv::dotenv;
use medichat::adapters::navigation::ScreenStack;
use medichat::adapters::ui::tui::ChatScreen;
use medichat::ports::{InputPort, NavigationPort};
use medichat::shared::bootstrap::AppContext;
use medichat::usecases::ChatSession;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env found"),
    }

    medichat::adapters::ui::init_ui();

    let ctx = AppContext::get_or_init();
    let reply_delay = Duration::from_millis(ctx.config.reply_delay_ms_or_default());
    info!(
        delay_ms = reply_delay.as_millis() as u64,
        "reply delay configured"
    );

    // --- Navigation: the chat screen sits on top of the dashboard ---
    let nav = Arc::new(ScreenStack::new("dashboard"));
    nav.push("chat");

    // --- Session + screen ---
    let session = Arc::new(ChatSession::new(reply_delay).await);
    let screen = ChatScreen::new(
        Arc::clone(&session),
        Arc::clone(&nav) as Arc<dyn NavigationPort>,
        ctx.config.dump_transcript_enabled(),
    );

    screen.run_chat().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
