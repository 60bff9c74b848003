//! FCM Core Types
//!
//! Message model and send reports for the FCM delivery channel.

mod message;
mod report;
mod route;

pub use message::*;
pub use report::*;
pub use route::*;
