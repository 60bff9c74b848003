//! Messaging client trait.

use fcm_core::{Message, MulticastReport, SendResponse};

use crate::SendError;

/// Low-level FCM send operations.
#[trait_variant::make(Send)]
pub trait Messaging: Send + Sync {
    /// Send one message to its target.
    async fn send(&self, message: &Message) -> Result<SendResponse, SendError>;

    /// Send one message to many tokens, collecting per-target outcomes.
    async fn send_multicast(
        &self,
        message: &Message,
        tokens: &[String],
    ) -> Result<MulticastReport, SendError>;
}
