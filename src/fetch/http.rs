/// reqwest-backed page loader
use super::{CookieSession, PageLoader, PageResponse, RequestOptions};
use crate::config::HttpConfig;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Loads channel pages over HTTP.
///
/// The client stores and replays cookies through the shared session jar,
/// including on every hop of a redirect chain.
#[derive(Clone)]
pub struct HttpPageLoader {
    client: Client,
    accept_language: String,
}

impl HttpPageLoader {
    pub fn new(config: &HttpConfig, session: &CookieSession) -> Result<Self> {
        let client = Client::builder()
            .cookie_provider(session.jar())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            accept_language: config.accept_language.clone(),
        })
    }
}

#[async_trait]
impl PageLoader for HttpPageLoader {
    async fn fetch(&self, url: &Url, options: &RequestOptions) -> Result<PageResponse> {
        let mut request = self
            .client
            .get(url.as_str())
            .header(ACCEPT_LANGUAGE, self.accept_language.as_str());

        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }
        if let Some(user_agent) = &options.user_agent {
            request = request.header(USER_AGENT, user_agent.as_str());
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        if response.url().as_str() != url.as_str() {
            debug!("Redirected from {} to {}", url, response.url());
        }
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!("📄 Downloaded {} characters from {} (HTTP {})", body.len(), url, status);

        Ok(PageResponse {
            status,
            headers,
            body,
        })
    }
}
