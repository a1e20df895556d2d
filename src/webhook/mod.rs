//! The inbound webhook endpoint.
//!
//! Exposes `POST /slack/events`. Every request is verified against the Slack
//! signing secret before the body is even parsed; invalid signatures are
//! rejected with `401` and cause no outbound sends. Verified requests are
//! always acknowledged with `200 ok`, whether or not any action is taken.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use slack_morphism::prelude::*;
use slack_morphism::signature_verifier::SlackEventSignatureVerifier;
use tracing::{instrument, warn};

use crate::{
    base::{config::Config, types::SlackEventPayload},
    interaction,
    service::chat::ChatClient,
};

/// Shared state for the webhook handler.
#[derive(Clone)]
struct AppState {
    verifier: Arc<SlackEventSignatureVerifier>,
    chat: ChatClient,
    reminder_threshold_secs: u64,
}

/// Build the webhook router.
pub fn router(config: &Config, chat: ChatClient) -> Router {
    let verifier = SlackEventSignatureVerifier::new(&SlackSigningSecret::new(config.slack_signing_secret.clone()));

    let state = AppState {
        verifier: Arc::new(verifier),
        chat,
        reminder_threshold_secs: config.reminder_threshold_secs,
    };

    Router::new().route("/slack/events", post(handle_event)).with_state(state)
}

/// Handles a Slack Events API webhook call.
#[instrument(skip_all)]
async fn handle_event(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> (StatusCode, &'static str) {
    // Verify the signature over the raw body before touching anything else.

    let signature = headers
        .get(SlackEventSignatureVerifier::SLACK_SIGNED_HASH_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let timestamp = headers
        .get(SlackEventSignatureVerifier::SLACK_SIGNED_TIMESTAMP)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    // The signing scheme is defined over the UTF-8 text of the body, so a
    // body that is not valid UTF-8 can never carry a valid signature.
    let Ok(body) = std::str::from_utf8(&body) else {
        warn!("Rejected webhook call with a non-UTF-8 body.");
        return (StatusCode::UNAUTHORIZED, "Unauthorized");
    };

    if state.verifier.verify(signature, body, timestamp).is_err() {
        warn!("Rejected webhook call with an invalid signature.");
        return (StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    // Parse the payload. A body we can't parse never matches a branch, so it
    // is acknowledged without action rather than bounced for a retry.

    let payload = match serde_json::from_str::<SlackEventPayload>(body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Ignoring unparseable webhook payload: {}", err);
            return (StatusCode::OK, "ok");
        }
    };

    if let Some(event) = &payload.event
        && event.thread_ts.is_some()
    {
        interaction::thread_event::handle_thread_event(event, &state.chat, state.reminder_threshold_secs).await;
    }

    (StatusCode::OK, "ok")
}
