use regex::Regex;
use std::sync::OnceLock;

/// First whitespace-delimited token of a display string ("1.2K views" -> "1.2K")
pub fn leading_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

fn abbreviated_count_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)?)([KkMmBb])$").ok())
        .as_ref()
}

/// Parse a display count such as "1,234", "1.2K" or "3M".
///
/// Returns `None` for anything that is not a count ("No", "N/A").
pub fn parse_count(token: &str) -> Option<u64> {
    let cleaned: String = token.trim().chars().filter(|c| *c != ',').collect();

    if let Ok(count) = cleaned.parse::<u64>() {
        return Some(count);
    }

    let captures = abbreviated_count_pattern()?.captures(&cleaned)?;
    let number: f64 = captures.get(1)?.as_str().parse().ok()?;
    let multiplier = match captures.get(2)?.as_str() {
        "K" | "k" => 1_000.0,
        "M" | "m" => 1_000_000.0,
        _ => 1_000_000_000.0,
    };

    Some((number * multiplier).round() as u64)
}
