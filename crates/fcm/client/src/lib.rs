//! FCM Client Layer
//!
//! HTTP v1 messaging client and project-keyed client resolution.

mod config;
mod error;
mod http;
mod manager;
mod traits;

pub use config::*;
pub use error::*;
pub use http::*;
pub use manager::*;
pub use traits::*;
