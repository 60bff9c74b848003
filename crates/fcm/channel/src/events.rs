//! Failure-event plumbing.

use fcm_client::SendError;

use crate::{Notifiable, PushNotification};

/// Event emitted when delivery to a recipient did not fully succeed.
pub struct NotificationFailed<'a> {
    /// Identity of the emitting channel.
    pub channel: &'static str,
    pub notifiable: &'a dyn Notifiable,
    pub notification: &'a dyn PushNotification,
    /// Human-readable failure message.
    pub message: String,
    /// The underlying send failure.
    pub cause: &'a SendError,
    /// Every token targeted by the failing call, not just the failing one.
    pub tokens: &'a [String],
}

/// Sink for failure events.
///
/// Dispatch is fire-and-forget: implementations handle their own failures
/// and must not panic back into the send loop.
pub trait EventDispatcher: Send + Sync {
    fn dispatch(&self, event: NotificationFailed<'_>);
}

/// Dispatcher that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventDispatcher;

impl EventDispatcher for NullEventDispatcher {
    fn dispatch(&self, _event: NotificationFailed<'_>) {}
}
