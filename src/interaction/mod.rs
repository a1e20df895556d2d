//! Event handling for the nudge-bot.
//!
//! This module decides what, if anything, to post into a thread for each
//! verified webhook event, and performs the outbound send.

pub mod thread_event;
