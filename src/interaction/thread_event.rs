//! Decision policy for thread events.
//!
//! A thread event carries the timestamp of the thread's latest reply (or a
//! sentinel meaning "never replied"). Based on that, the bot either posts a
//! confirmation, posts a reminder, or stays quiet.

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::{
    base::types::{NO_REPLY_SENTINEL, ThreadAction, ThreadEvent},
    service::chat::ChatClient,
};

/// Classify a thread by its latest reply timestamp.
///
/// The sentinel is checked before the elapsed-time computation: a
/// never-replied thread gets a confirmation, not a reminder, even though its
/// sentinel timestamp would otherwise look maximally stale.
pub fn classify_reply(latest_reply: &str, now_epoch_secs: f64, threshold_secs: u64) -> Option<ThreadAction> {
    if latest_reply == NO_REPLY_SENTINEL {
        return Some(ThreadAction::Confirm);
    }

    let Ok(reply_ts) = latest_reply.parse::<f64>() else {
        warn!("Ignoring unparseable latest_reply timestamp: {latest_reply}");
        return None;
    };

    if now_epoch_secs - reply_ts > threshold_secs as f64 {
        Some(ThreadAction::Remind)
    } else {
        None
    }
}

/// Handle a single verified thread event.
///
/// Sends at most one message. Send failures are logged and swallowed: the
/// webhook caller gets its acknowledgement either way, and Slack will re-fire
/// the event if the thread is still unattended later.
#[instrument(skip(chat))]
pub async fn handle_thread_event(event: &ThreadEvent, chat: &ChatClient, threshold_secs: u64) {
    // An event missing any field never matches a branch.
    let (Some(channel), Some(thread_ts), Some(latest_reply)) = (&event.channel, &event.thread_ts, &event.latest_reply) else {
        warn!("Ignoring thread event with missing fields.");
        return;
    };

    let now = Utc::now().timestamp() as f64;

    let Some(action) = classify_reply(latest_reply, now, threshold_secs) else {
        info!("Thread has a recent reply; no action taken.");
        return;
    };

    info!("Taking action {:?} on thread {} in channel {}", action, thread_ts, channel);

    if let Err(err) = chat.send_message(channel, thread_ts, action.text()).await {
        error!("Error sending {:?} message: {}", action, err);
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000.0;
    const THRESHOLD: u64 = 1800;

    #[test]
    fn never_replied_thread_is_confirmed() {
        assert_eq!(classify_reply("0", NOW, THRESHOLD), Some(ThreadAction::Confirm));
    }

    #[test]
    fn stale_thread_is_reminded() {
        let latest_reply = format!("{:.6}", NOW - 1801.0);
        assert_eq!(classify_reply(&latest_reply, NOW, THRESHOLD), Some(ThreadAction::Remind));
    }

    #[test]
    fn fresh_thread_is_left_alone() {
        let latest_reply = format!("{:.6}", NOW - 60.0);
        assert_eq!(classify_reply(&latest_reply, NOW, THRESHOLD), None);
    }

    #[test]
    fn reply_exactly_at_threshold_is_left_alone() {
        let latest_reply = format!("{:.6}", NOW - THRESHOLD as f64);
        assert_eq!(classify_reply(&latest_reply, NOW, THRESHOLD), None);
    }

    #[test]
    fn unparseable_timestamp_is_left_alone() {
        assert_eq!(classify_reply("not-a-timestamp", NOW, THRESHOLD), None);
    }

    #[test]
    fn confirmation_wins_over_reminder_for_sentinel() {
        // The sentinel parses as epoch zero, which would look maximally
        // stale; the sentinel check must take precedence.
        assert_eq!(classify_reply("0", NOW, THRESHOLD), Some(ThreadAction::Confirm));
    }
}
