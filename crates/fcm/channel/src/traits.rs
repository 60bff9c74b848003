//! Application-facing channel traits.

use fcm_core::{Message, Tokens};

/// Channel key recipients are routed by.
pub const CHANNEL: &str = "fcm";

/// A recipient push notifications can be routed to.
pub trait Notifiable: Send + Sync {
    /// Device tokens for the given channel.
    fn route_notification_for(
        &self,
        channel: &str,
        notification: &dyn PushNotification,
    ) -> Tokens;
}

/// A notification deliverable over FCM.
pub trait PushNotification: Send + Sync {
    /// Build the provider message for this recipient.
    fn to_fcm(&self, notifiable: &dyn Notifiable) -> Message;

    /// Project override for this send; defaults to the process-wide project.
    fn fcm_project(&self, _notifiable: &dyn Notifiable, _message: &Message) -> Option<String> {
        None
    }
}
