//! Channel error taxonomy.

use fcm_client::SendError;
use thiserror::Error;

/// Failure of one [`FcmChannel::send`](crate::FcmChannel::send) call.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The notification did not produce a sendable message.
    #[error("invalid FCM message: {0}")]
    InvalidMessage(String),

    /// One or more per-token sends were rejected by FCM.
    #[error("fcm service responded with an error: {0}")]
    Service(String),

    /// An unclassified client failure aborted the send loop.
    #[error(transparent)]
    Send(#[from] SendError),
}
