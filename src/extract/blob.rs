/// Locates the embedded initial-state JSON inside raw page text
use crate::error::ExtractionError;
use serde_json::Value;
use tracing::debug;

/// Marker that precedes the embedded blob in the page script
pub const INITIAL_DATA_START: &str = "var ytInitialData = ";

/// Marker that terminates the embedded blob
pub const INITIAL_DATA_END: &str = ";</script>";

/// Return the text strictly between the first `start` and the first `end`
/// that follows it.
pub fn content_between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let len = text[from..].find(end)?;
    Some(&text[from..from + len])
}

/// Isolates and parses the embedded data blob
#[derive(Debug, Clone)]
pub struct BlobLocator {
    start_marker: String,
    end_marker: String,
}

impl BlobLocator {
    pub fn new(start_marker: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
        }
    }

    /// Find the blob in `page` and parse it as JSON
    pub fn locate(&self, page: &str) -> Result<Value, ExtractionError> {
        let raw = content_between(page, &self.start_marker, &self.end_marker)
            .ok_or(ExtractionError::BlobNotFound)?;

        debug!("Isolated {} bytes of embedded page data", raw.len());

        serde_json::from_str(raw).map_err(|e| ExtractionError::MalformedBlob(e.to_string()))
    }
}

impl Default for BlobLocator {
    fn default() -> Self {
        Self::new(INITIAL_DATA_START, INITIAL_DATA_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locate_initial_data() {
        let page = r#"<html><script>var ytInitialData = {"a":1};</script></html>"#;
        let value = BlobLocator::default().locate(page).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_missing_end_marker() {
        let page = r#"<script>var ytInitialData = {"a":1}</script>"#;
        let err = BlobLocator::default().locate(page).unwrap_err();
        assert_eq!(err, ExtractionError::BlobNotFound);
    }

    #[test]
    fn test_missing_start_marker() {
        let page = "<script>window.other = {};</script>";
        let err = BlobLocator::default().locate(page).unwrap_err();
        assert_eq!(err, ExtractionError::BlobNotFound);
    }

    #[test]
    fn test_end_marker_only_before_start() {
        let page = r#";</script><script>var ytInitialData = {"a":1}"#;
        assert!(content_between(page, INITIAL_DATA_START, INITIAL_DATA_END).is_none());
    }

    #[test]
    fn test_malformed_blob() {
        let page = r#"<script>var ytInitialData = {"a":;</script>"#;
        let err = BlobLocator::default().locate(page).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedBlob(_)));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let page = r#"var ytInitialData = {"n":1};</script>var ytInitialData = {"n":2};</script>"#;
        let value = BlobLocator::default().locate(page).unwrap();
        assert_eq!(value["n"], 1);
    }

    #[test]
    fn test_custom_markers() {
        let locator = BlobLocator::new("<data>", "</data>");
        let value = locator.locate("prefix <data>[1,2,3]</data> suffix").unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }
}
