use regex::Regex;
use std::sync::OnceLock;

/// A quoted phrase (closing quote optional) or a bare word
fn keyword_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r#""([^"]*)"?|([^\s"]+)"#).ok())
        .as_ref()
}

/// Split a channel keyword string into tags.
///
/// The source field mixes bare words with double-quoted phrases:
/// `"rock music" pop` becomes `["rock music", "pop"]`. Order is preserved and
/// repeated tags are kept once.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    let tokens: Vec<&str> = match keyword_pattern() {
        Some(re) => re
            .captures_iter(raw)
            .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
            .map(|m| m.as_str())
            .collect(),
        None => raw.split_whitespace().collect(),
    };

    for token in tokens {
        let tag = token.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}
