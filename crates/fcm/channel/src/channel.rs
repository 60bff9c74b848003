//! The FCM delivery channel.

use fcm_client::{Messaging, MessagingManager, SendError};
use fcm_core::{Message, MulticastReport, SendResponse};

use crate::{
    CHANNEL, ChannelError, EventDispatcher, Notifiable, NotificationFailed, PushNotification,
};

/// Separator for aggregated per-token error messages.
const ERROR_SEPARATOR: &str = "; ";

/// Push delivery channel over FCM.
///
/// Holds the client registry and the failure-event sink; constructed once at
/// process start and reused across sends.
pub struct FcmChannel<M, E> {
    clients: MessagingManager<M>,
    events: E,
}

impl<M, E> FcmChannel<M, E>
where
    M: Messaging,
    E: EventDispatcher,
{
    pub fn new(clients: MessagingManager<M>, events: E) -> Self {
        Self { clients, events }
    }

    /// Deliver `notification` to every token `notifiable` routes for this
    /// channel.
    ///
    /// Tokens are attempted in resolution order. FCM-classified failures are
    /// deferred: the loop continues, one [`NotificationFailed`] event is
    /// dispatched per failure, and the call ends with
    /// [`ChannelError::Service`] aggregating every failure message — in that
    /// case the responses of the sends that did succeed are dropped. Any
    /// other client failure aborts the loop immediately, leaving the
    /// remaining tokens unattempted.
    pub async fn send(
        &self,
        notifiable: &dyn Notifiable,
        notification: &dyn PushNotification,
    ) -> Result<Vec<SendResponse>, ChannelError> {
        let tokens = notifiable
            .route_notification_for(CHANNEL, notification)
            .into_vec();

        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut message = notification.to_fcm(notifiable);
        message.validate().map_err(ChannelError::InvalidMessage)?;

        let project = notification.fcm_project(notifiable, &message);
        let client = self.clients.resolve(project.as_deref());

        let mut responses = Vec::with_capacity(tokens.len());
        let mut failures = Vec::new();

        for token in &tokens {
            match self.send_to_token(client, &mut message, token).await {
                Ok(response) => {
                    tracing::info!(
                        token = %redact(token),
                        message_id = %response.message_id(),
                        "sent FCM message"
                    );
                    responses.push(response);
                }
                Err(error) if error.is_messaging() => {
                    tracing::warn!(
                        token = %redact(token),
                        code = error.code().unwrap_or_default(),
                        error = %error,
                        "FCM rejected send"
                    );
                    self.events.dispatch(NotificationFailed {
                        channel: CHANNEL,
                        notifiable,
                        notification,
                        message: error.to_string(),
                        cause: &error,
                        tokens: &tokens,
                    });
                    failures.push(error.to_string());
                }
                Err(error) => {
                    tracing::error!(error = ?error, "FCM send failed, aborting");
                    return Err(error.into());
                }
            }
        }

        if !failures.is_empty() {
            return Err(ChannelError::Service(failures.join(ERROR_SEPARATOR)));
        }

        Ok(responses)
    }

    /// Rewrite the message target for one token and perform a single send.
    ///
    /// Client errors propagate uninterpreted.
    async fn send_to_token(
        &self,
        client: &M,
        message: &mut Message,
        token: &str,
    ) -> Result<SendResponse, SendError> {
        let outgoing = message.for_token(token);
        client.send(&outgoing).await
    }

    /// Pass a message and full token list straight to the provider's
    /// multicast capability.
    ///
    /// Not used by [`send`](Self::send); callers wanting batch semantics
    /// instead of the per-token loop call this directly.
    pub async fn send_multicast(
        &self,
        message: &Message,
        tokens: &[String],
        project: Option<&str>,
    ) -> Result<MulticastReport, SendError> {
        self.clients
            .resolve(project)
            .send_multicast(message, tokens)
            .await
    }
}

/// First 10 characters of the token; full tokens never reach the logs.
fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{prefix}…")
}
