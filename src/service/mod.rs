//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the nudge-bot:
//! - Chat services (e.g., Slack)
//!
//! The chat module defines both a generic trait and a concrete Slack
//! implementation, allowing for extensibility and easy testing.

pub mod chat;
