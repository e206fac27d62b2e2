/// Error types for channel extraction
///
/// Failures are split by stage so callers can tell an unreachable upstream
/// (`Transport`) apart from an upstream page that changed shape (`Extraction`).

/// Result type for channel extraction operations
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Top-level error returned by the channel client
#[derive(thiserror::Error, Debug)]
pub enum ChannelError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Failed to fetch url \"{url}\": {reason}")]
    Transport {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("Failed to parse data from webpage: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Failures while isolating or interpreting the embedded page data
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("embedded data blob not found")]
    BlobNotFound,

    #[error("embedded data blob is not valid JSON: {0}")]
    MalformedBlob(String),

    #[error("bad duration {0:?}")]
    BadDuration(String),
}

impl ChannelError {
    /// Short name of the stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            ChannelError::Input(_) => "input",
            ChannelError::Transport { .. } => "fetch",
            ChannelError::Extraction(_) => "parse",
        }
    }

    /// Only transport failures can succeed on a later attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ChannelError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(ChannelError::Input("empty".into()).stage(), "input");
        let transport = ChannelError::Transport {
            url: "https://example.com".into(),
            status: Some(503),
            reason: "HTTP 503".into(),
        };
        assert_eq!(transport.stage(), "fetch");
        assert_eq!(ChannelError::from(ExtractionError::BlobNotFound).stage(), "parse");
    }

    #[test]
    fn test_only_transport_is_retryable() {
        let transport = ChannelError::Transport {
            url: "https://example.com".into(),
            status: None,
            reason: "connection reset".into(),
        };
        assert!(transport.is_retryable());
        assert!(!ChannelError::from(ExtractionError::MalformedBlob("eof".into())).is_retryable());
        assert!(!ChannelError::Input("bad".into()).is_retryable());
    }

    #[test]
    fn test_transport_message_names_url() {
        let err = ChannelError::Transport {
            url: "https://www.youtube.com/channel/UC123".into(),
            status: Some(404),
            reason: "HTTP 404 Not Found".into(),
        };
        let message = err.to_string();
        assert!(message.contains("UC123"));
        assert!(message.contains("404"));
    }
}
