//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default address the webhook endpoint binds to.
fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

/// Default staleness threshold (seconds) before a thread gets a reminder.
fn default_reminder_threshold_secs() -> u64 {
    1800
}

/// Configuration for the nudge-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The shared inner configuration.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The actual configuration values.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack bot token used for outbound sends (`SLACK_API_TOKEN`).
    pub slack_api_token: String,
    /// Slack signing secret for webhook verification (`SLACK_SIGNING_SECRET`).
    pub slack_signing_secret: String,
    /// Address the webhook endpoint binds to (`BIND_ADDRESS`).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Seconds since the latest reply after which a thread is considered
    /// stale and gets a reminder (`REMINDER_THRESHOLD_SECS`).
    #[serde(default = "default_reminder_threshold_secs")]
    pub reminder_threshold_secs: u64,
}

impl Config {
    /// Load configuration from the environment and an optional TOML file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("NUDGE_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.slack_api_token.is_empty() {
            return Err(anyhow::anyhow!("Slack API token must be set."));
        }

        if result.slack_signing_secret.is_empty() {
            return Err(anyhow::anyhow!("Slack signing secret must be set."));
        }

        if result.reminder_threshold_secs == 0 {
            return Err(anyhow::anyhow!("Reminder threshold must be at least 1 second."));
        }

        Ok(result)
    }
}
