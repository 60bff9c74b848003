//! Client error types.

use thiserror::Error;

/// Failure of one [`Messaging`](crate::Messaging) call.
///
/// Only the [`Messaging`](SendError::Messaging) variant is classified by FCM
/// itself; the channel defers those and aborts on everything else.
#[derive(Debug, Error)]
pub enum SendError {
    /// FCM rejected the send with a well-formed v1 error body.
    #[error("fcm error {code}: {message}")]
    Messaging { code: String, message: String },

    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response FCM did not classify, or a malformed body.
    #[error("unexpected response (status {status}): {body}")]
    Response { status: u16, body: String },
}

impl SendError {
    /// Whether FCM itself classified this failure.
    pub fn is_messaging(&self) -> bool {
        matches!(self, SendError::Messaging { .. })
    }

    /// FCM error code, when classified.
    pub fn code(&self) -> Option<&str> {
        match self {
            SendError::Messaging { code, .. } => Some(code),
            _ => None,
        }
    }
}
