/// Channel Info - Rust Implementation
///
/// Extracts a normalized channel profile (identity, assets, tags and the
/// first page of videos and shorts) from the initial-state data embedded in
/// a channel page.

pub mod channel;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;

// Re-export main types for easy access
pub use crate::channel::{ChannelClient, ChannelOptions, ChannelRecord, VideoEntry};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{ChannelError, ExtractionError, Result};
pub use crate::extract::{BlobLocator, VideoDuration};
pub use crate::fetch::{CookieSession, HttpPageLoader, PageLoader, PageResponse, RequestOptions, SessionStore};
