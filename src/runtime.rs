//! Runtime services and shared state for the nudge-bot.

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    service::chat::ChatClient,
    webhook,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client and configuration. It is designed to be
/// trivially cloneable, allowing it to be passed around without the need for
/// `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the slack client.
        let chat = ChatClient::slack(&config)?;

        Ok(Self { config, chat })
    }

    /// Bind the webhook endpoint and serve until shutdown.
    pub async fn start(&self) -> Void {
        let app = webhook::router(&self.config, self.chat.clone());

        let listener = TcpListener::bind(&self.config.bind_address).await?;
        info!("Listening for Slack events on {}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
