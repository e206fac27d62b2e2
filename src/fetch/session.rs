/// Cookie session shared across page fetches
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Receives response headers after each fetch
///
/// Absorbing is fire-and-forget: implementations swallow their own failures.
pub trait SessionStore: Send + Sync {
    fn absorb(&self, url: &Url, headers: &HeaderMap);
}

/// `SessionStore` backed by a reqwest cookie jar
#[derive(Debug, Default, Clone)]
pub struct CookieSession {
    jar: Arc<Jar>,
}

impl CookieSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared jar, for handing to `reqwest::ClientBuilder::cookie_provider`
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// `Cookie` header value to send to `url`, if any cookies apply
    pub fn cookie_header(&self, url: &Url) -> Option<HeaderValue> {
        self.jar.cookies(url)
    }
}

impl SessionStore for CookieSession {
    fn absorb(&self, url: &Url, headers: &HeaderMap) {
        let count = headers.get_all(SET_COOKIE).iter().count();
        if count == 0 {
            return;
        }

        // Unparsable cookies are dropped by the jar itself
        self.jar.set_cookies(&mut headers.get_all(SET_COOKIE).iter(), url);
        debug!("Absorbed {} Set-Cookie headers from {}", count, url.host_str().unwrap_or("?"));
    }
}
