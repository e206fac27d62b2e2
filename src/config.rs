use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::extract::{INITIAL_DATA_END, INITIAL_DATA_START};

/// Configuration for the channel extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page fetching settings
    pub http: HttpConfig,

    /// Embedded data extraction settings
    pub extraction: ExtractionConfig,

    /// Output and logging settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Accept-Language header; the tab titles matched during extraction are English
    pub accept_language: String,

    /// Base URL that bare channel ids are appended to
    pub channel_base_url: String,

    /// Base URL that `@handle` identifiers are appended to
    pub handle_base_url: String,

    /// Maximum channel pages fetched at once by the CLI
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Build video and short entries from the channel tabs
    pub include_videos: bool,

    /// Text preceding the embedded JSON blob
    pub blob_start_marker: String,

    /// Text following the embedded JSON blob
    pub blob_end_marker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Config {
    /// Load configuration from the default search paths, then the environment
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&["channel-info.toml", "config/channel-info.toml"])
    }

    /// Load the first config file that exists among `paths`.
    ///
    /// A file that exists but does not parse is an error rather than a silent
    /// fallback. With no file present, settings come from the environment.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                return Self::load_from(path)
                    .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e));
            }
        }

        tracing::debug!("No configuration file found, using environment and defaults");
        Self::from_env()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = toml::from_str(&config_str)?;
        tracing::info!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("CHANNEL_INFO_TIMEOUT") {
            config.http.timeout_seconds = timeout.parse().unwrap_or(30);
        }

        if let Ok(user_agent) = std::env::var("CHANNEL_INFO_USER_AGENT") {
            config.http.user_agent = user_agent;
        }

        if let Ok(max) = std::env::var("CHANNEL_INFO_MAX_CONCURRENT") {
            config.http.max_concurrent_requests = max.parse().unwrap_or(4);
        }

        if let Ok(log_level) = std::env::var("CHANNEL_INFO_LOG_LEVEL") {
            config.output.log_level = log_level;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path.as_ref().display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_seconds == 0 {
            return Err(anyhow!("timeout_seconds must be greater than 0"));
        }

        if self.http.max_concurrent_requests == 0 {
            return Err(anyhow!("max_concurrent_requests must be greater than 0"));
        }

        for (name, base) in [
            ("channel_base_url", &self.http.channel_base_url),
            ("handle_base_url", &self.http.handle_base_url),
        ] {
            if let Err(e) = url::Url::parse(base) {
                return Err(anyhow!("{} is not a valid URL ({}): {}", name, base, e));
            }
        }

        if self.extraction.blob_start_marker.is_empty() || self.extraction.blob_end_marker.is_empty() {
            return Err(anyhow!("blob markers must not be empty"));
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        format!(
            "Channel Info Configuration:\n\
            - Timeout: {}s\n\
            - Max Concurrent Requests: {}\n\
            - Channel Base URL: {}\n\
            - Include Videos: {}\n\
            - Log Level: {}",
            self.http.timeout_seconds,
            self.http.max_concurrent_requests,
            self.http.channel_base_url,
            self.extraction.include_videos,
            self.output.log_level,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                timeout_seconds: 30,
                user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
                accept_language: "en-US,en;q=0.9".to_string(),
                channel_base_url: "https://www.youtube.com/channel/".to_string(),
                handle_base_url: "https://www.youtube.com/".to_string(),
                max_concurrent_requests: num_cpus::get().min(8), // Use available cores, max 8
            },
            extraction: ExtractionConfig {
                include_videos: true,
                blob_start_marker: INITIAL_DATA_START.to_string(),
                blob_end_marker: INITIAL_DATA_END.to_string(),
            },
            output: OutputConfig {
                log_level: "info".to_string(),
                pretty: true,
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.http.timeout_seconds = seconds;
        self
    }

    pub fn with_channel_base_url(mut self, base: impl Into<String>) -> Self {
        self.config.http.channel_base_url = base.into();
        self
    }

    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.config.http.max_concurrent_requests = max;
        self
    }

    pub fn include_videos(mut self, include: bool) -> Self {
        self.config.extraction.include_videos = include;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.output.log_level = level.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
