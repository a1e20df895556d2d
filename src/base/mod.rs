//! Core components, types, and utilities for the nudge-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The fixed reply texts posted into threads.
//! - Common types and result handling.

pub mod config;
pub mod messages;
pub mod types;
