//! FCM Notification Channel
//!
//! Adapter between an application's notification layer and FCM delivery:
//! resolves device tokens, shapes messages, dispatches per token and reports
//! failures back through an event sink.

mod channel;
mod error;
mod events;
mod traits;

pub use channel::*;
pub use error::*;
pub use events::*;
pub use traits::*;

// Re-export for convenience
pub use fcm_client;
pub use fcm_core;
