//! Library root for `nudge-bot`.
//!
//! Nudge-bot is a small Slack Events API service that keeps support threads
//! from going quiet:
//! - Acknowledges threads that have never been replied to
//! - Nudges threads whose latest reply has gone stale
//!
//! The bot receives events over a signed HTTP webhook and posts replies
//! through the Slack Web API. It is stateless across requests; the only
//! state is the configuration loaded at startup.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod webhook;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the nudge-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the Slack chat client
/// - Binds the webhook endpoint and serves until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting nudge-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider().install_default().unwrap();

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
