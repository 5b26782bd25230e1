//! Application configuration. Reply timing, exit behavior.

use serde::Deserialize;

/// Default delay in ms before the automated reply is delivered.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Delay in ms before the scheduled reply fires. Read from MEDICHAT_REPLY_DELAY_MS.
    #[serde(default)]
    pub reply_delay_ms: Option<u64>,

    /// Print the session transcript as JSON when leaving the chat screen.
    /// Read from MEDICHAT_DUMP_TRANSCRIPT.
    #[serde(default)]
    pub dump_transcript: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MEDICHAT"));
        if let Ok(path) = std::env::var("MEDICHAT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // REPLY_DELAY_MS is read directly (no MEDICHAT_ prefix) so .env can use REPLY_DELAY_MS=250
        if let Ok(s) = std::env::var("REPLY_DELAY_MS") {
            if let Ok(ms) = s.parse::<u64>() {
                cfg.reply_delay_ms = Some(ms);
            }
        }
        // MEDICHAT_DUMP_TRANSCRIPT accepts 1/true in .env
        if let Ok(s) = std::env::var("MEDICHAT_DUMP_TRANSCRIPT") {
            cfg.dump_transcript = Some(s == "1" || s.eq_ignore_ascii_case("true"));
        }
        Ok(cfg)
    }

    /// Returns the reply delay in milliseconds. Defaults to 1000 if unset.
    pub fn reply_delay_ms_or_default(&self) -> u64 {
        self.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS)
    }

    /// Returns true if the transcript should be printed on exit.
    pub fn dump_transcript_enabled(&self) -> bool {
        self.dump_transcript.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.reply_delay_ms_or_default(), DEFAULT_REPLY_DELAY_MS);
        assert!(!cfg.dump_transcript_enabled());
    }
}
