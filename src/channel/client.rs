/// Fetches channel pages and turns them into channel records
use super::{normalize_channel, ChannelOptions, ChannelRecord};
use crate::config::Config;
use crate::error::{ChannelError, Result};
use crate::extract::BlobLocator;
use crate::fetch::{CookieSession, HttpPageLoader, PageLoader, SessionStore};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Channel profile client
#[derive(Clone)]
pub struct ChannelClient {
    loader: Arc<dyn PageLoader>,
    session: Arc<dyn SessionStore>,
    locator: BlobLocator,
    channel_base_url: String,
    handle_base_url: String,
}

impl ChannelClient {
    /// Create a client that fetches over HTTP with a fresh cookie session
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let session = Arc::new(CookieSession::new());
        let loader = HttpPageLoader::new(&config.http, &session)?;
        Ok(Self::with_collaborators(config, Arc::new(loader), session))
    }

    /// Create a client around caller-supplied collaborators
    pub fn with_collaborators(
        config: &Config,
        loader: Arc<dyn PageLoader>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            loader,
            session,
            locator: BlobLocator::new(
                config.extraction.blob_start_marker.clone(),
                config.extraction.blob_end_marker.clone(),
            ),
            channel_base_url: config.http.channel_base_url.clone(),
            handle_base_url: config.http.handle_base_url.clone(),
        }
    }

    /// Turn a channel id, `@handle` or absolute URL into the page URL
    pub fn resolve_url(&self, identifier: &str) -> Result<Url> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ChannelError::Input("channel identifier must not be empty".to_string()));
        }

        let raw = if identifier.starts_with("http") {
            identifier.to_string()
        } else if let Some(handle) = identifier.strip_prefix('@') {
            if handle.is_empty() {
                return Err(ChannelError::Input("channel handle must not be empty".to_string()));
            }
            format!("{}/@{}", self.handle_base_url.trim_end_matches('/'), urlencoding::encode(handle))
        } else {
            format!("{}/{}", self.channel_base_url.trim_end_matches('/'), urlencoding::encode(identifier))
        };

        let url = Url::parse(&raw)
            .map_err(|e| ChannelError::Input(format!("invalid channel url {:?}: {}", raw, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ChannelError::Input(format!("unsupported url scheme {:?}", scheme))),
        }
    }

    /// Fetch a channel page and extract its profile
    pub async fn channel_info(&self, identifier: &str, options: &ChannelOptions) -> Result<ChannelRecord> {
        let url = self.resolve_url(identifier)?;
        info!("🔍 Fetching channel page: {}", url);

        let response = self
            .loader
            .fetch(&url, &options.request_options)
            .await
            .map_err(|e| ChannelError::Transport {
                url: url.to_string(),
                status: None,
                reason: format!("{:#}", e),
            })?;

        if !response.is_success() {
            let reason = StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unexpected status");
            return Err(ChannelError::Transport {
                url: url.to_string(),
                status: Some(response.status),
                reason: format!("HTTP {} {}", response.status, reason),
            });
        }

        self.session.absorb(&url, &response.headers);

        let data = self.locator.locate(&response.body)?;
        debug!("Parsed embedded page data for {}", url);

        let record = normalize_channel(&data, options.include_videos);
        info!(
            "✅ Extracted channel {} ({} videos, {} shorts, {} tags)",
            record.name.as_deref().unwrap_or("<unknown>"),
            record.videos.len(),
            record.shorts.len(),
            record.tags.len()
        );

        Ok(record)
    }
}
