/// Page retrieval collaborators
///
/// The channel client only depends on the `PageLoader` and `SessionStore`
/// traits. `HttpPageLoader` and `CookieSession` are the reqwest-backed
/// implementations used by the binary.

pub mod http;
pub mod session;

pub use http::HttpPageLoader;
pub use session::{CookieSession, SessionStore};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;
use url::Url;

/// Transport settings passed through to the loader untouched
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra request headers
    pub headers: Vec<(String, String)>,
    /// Per-request timeout overriding the client default
    pub timeout: Option<Duration>,
    /// User agent overriding the client default
    pub user_agent: Option<String>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Raw result of a page fetch
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl PageResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches raw page text
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn fetch(&self, url: &Url, options: &RequestOptions) -> Result<PageResponse>;
}
