use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde_json::Value;

static RETRY_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)retry in (\d+\.?\d*)s").expect("retry hint pattern is valid")
});

const RETRY_INFO_TYPE: &str = "type.googleapis.com/google.rpc.RetryInfo";

/// Extract the delay the API asked us to wait before retrying.
///
/// Looks at the structured `RetryInfo` detail first (`"retryDelay": "37s"`),
/// then at the human-readable message (`"Please retry in 37.5s."`).
pub fn retry_hint(details: &[Value], message: &str) -> Option<Duration> {
    details
        .iter()
        .filter(|detail| detail.get("@type").and_then(Value::as_str) == Some(RETRY_INFO_TYPE))
        .filter_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
        .find_map(parse_seconds)
        .or_else(|| {
            RETRY_IN
                .captures(message)
                .and_then(|captures| captures.get(1))
                .and_then(|secs| parse_seconds(secs.as_str()))
        })
}

/// Parse `"37s"`, `"37.5s"` or a bare number of seconds, rounding up to whole milliseconds
fn parse_seconds(raw: &str) -> Option<Duration> {
    let secs: f64 = raw.trim().trim_end_matches('s').parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(Duration::from_millis((secs * 1000.0).ceil() as u64))
}
