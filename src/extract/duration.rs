use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Video length as shown on the page plus its value in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDuration {
    /// Display text, e.g. "12:04"
    pub text: String,
    /// Total seconds derived from `text`
    pub seconds: u64,
}

impl VideoDuration {
    pub fn parse(text: &str) -> Result<Self, ExtractionError> {
        Ok(Self {
            text: text.to_string(),
            seconds: parse_duration_seconds(text)?,
        })
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Convert "M:SS" or "H:MM:SS" into total seconds
pub fn parse_duration_seconds(text: &str) -> Result<u64, ExtractionError> {
    let bad = || ExtractionError::BadDuration(text.to_string());

    let parts = text
        .split(':')
        .map(|part| {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad());
            }
            part.parse::<u64>().map_err(|_| bad())
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let total = match parts.as_slice() {
        [minutes, seconds] => minutes.checked_mul(60).and_then(|m| m.checked_add(*seconds)),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(*seconds)),
        _ => return Err(bad()),
    };

    total.ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(parse_duration_seconds("1:30").unwrap(), 90);
        assert_eq!(parse_duration_seconds("0:07").unwrap(), 7);
        assert_eq!(parse_duration_seconds("59:59").unwrap(), 3599);
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_duration_seconds("1:02:03").unwrap(), 3723);
        assert_eq!(parse_duration_seconds("10:00:00").unwrap(), 36000);
    }

    #[test]
    fn test_wrong_component_count() {
        for text in ["45", "1:2:3:4", ""] {
            assert_eq!(
                parse_duration_seconds(text),
                Err(ExtractionError::BadDuration(text.to_string())),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_numeric_component() {
        for text in ["1:xx", "LIVE", "1::30", "-1:30", "1:+3"] {
            assert!(matches!(
                parse_duration_seconds(text),
                Err(ExtractionError::BadDuration(_))
            ));
        }
    }

    #[test]
    fn test_overflow_is_rejected() {
        let text = format!("{}:00:00", u64::MAX);
        assert!(parse_duration_seconds(&text).is_err());
    }

    #[test]
    fn test_seconds_recomputable_from_text() {
        let duration = VideoDuration::parse("1:02:03").unwrap();
        assert_eq!(duration.text, "1:02:03");
        assert_eq!(parse_duration_seconds(&duration.text).unwrap(), duration.seconds);
        assert_eq!(duration.to_string(), "1:02:03");
    }
}
