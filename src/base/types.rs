//! Common types and result aliases for the nudge-bot.

use serde::Deserialize;

use crate::base::messages;

/// The error type used throughout the application.
pub type Err = anyhow::Error;
/// A result with the application error type.
pub type Res<T> = Result<T, Err>;
/// A void result with the application error type.
pub type Void = Res<()>;

/// Sentinel value of `latest_reply` meaning the thread has never been replied to.
pub const NO_REPLY_SENTINEL: &str = "0";

/// Envelope of a Slack Events API webhook payload.
///
/// Only the `event` object is of interest; everything else in the payload
/// (team id, api app id, etc.) is ignored.
#[derive(Debug, Deserialize)]
pub struct SlackEventPayload {
    /// The event object, if the payload carries one.
    #[serde(default)]
    pub event: Option<ThreadEvent>,
}

/// The subset of a Slack event the bot acts on.
///
/// All fields are optional: an event missing any of them simply never
/// matches a branch and is acknowledged without action.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadEvent {
    /// Channel the thread lives in.
    pub channel: Option<String>,
    /// Identifier of the thread's root message.
    pub thread_ts: Option<String>,
    /// Timestamp of the latest reply, or [`NO_REPLY_SENTINEL`].
    pub latest_reply: Option<String>,
}

/// The outbound action chosen for a thread event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadAction {
    /// The thread has never been replied to; acknowledge it.
    Confirm,
    /// The latest reply is older than the threshold; nudge for an update.
    Remind,
}

impl ThreadAction {
    /// The fixed reply text for this action.
    pub fn text(&self) -> &'static str {
        match self {
            ThreadAction::Confirm => messages::CONFIRMATION_TEXT,
            ThreadAction::Remind => messages::REMINDER_TEXT,
        }
    }
}
