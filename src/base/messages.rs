//! Fixed reply texts posted into threads.

/// Posted into a thread that has never been replied to.
pub const CONFIRMATION_TEXT: &str = "Sure! We are checking this.";

/// Posted into a thread whose latest reply has gone stale.
pub const REMINDER_TEXT: &str = "It's been 30 minutes. Is there a follow-up? Please provide an update.";
