pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the outbound functionality the bot needs from a chat
/// platform like Slack. Implementing it allows different chat services (and
/// mocks in tests) to be used with the nudge-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Send a message into a channel thread.
    ///
    /// The message is posted as a threaded reply to `thread_ts`.
    async fn send_message(&self, channel_id: &str, thread_ts: &str, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    /// Wraps an existing client implementation (useful for tests).
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
