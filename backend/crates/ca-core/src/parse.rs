//! Turning free-form model output into typed values.
//!
//! Models wrap JSON in markdown fences, add chatty preambles and drift in
//! formatting. Everything here is tolerant: it extracts what it can and
//! reports an error only when nothing usable remains.

use crate::models::lenient;
use crate::{ActionPlan, CareerRecommendation, CareerSuggestion, CoreError, Result};

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json|```").expect("code fence pattern is valid"));

static CAREER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*:\s(.+)").expect("career line pattern is valid"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+[.)]|[-•])\s*").expect("list marker pattern is valid"));

/// Remove markdown code fences (```json and ```) and trim.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Slice from the first `[` or `{` to the last `]` or `}`, inclusive.
///
/// Returns the input unchanged when no such span exists.
pub fn extract_json_span(text: &str) -> &str {
    span_between(text, &['[', '{'], &[']', '}'])
}

/// Slice from the first `{` to the last `}`, inclusive.
pub fn extract_object_span(text: &str) -> &str {
    span_between(text, &['{'], &['}'])
}

fn span_between<'a>(text: &'a str, open: &[char], close: &[char]) -> &'a str {
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if start <= end => &text[start..=end],
        _ => text,
    }
}

/// Parse `*Career Title*: Description` lines.
///
/// Lines must contain a colon and start with `*` once an optional list
/// marker (`1.`, `2)`, `-`) is removed. Markdown bold (`**Title**`) is
/// accepted; surrounding asterisks are trimmed from the title.
pub fn parse_career_lines(text: &str) -> Vec<CareerSuggestion> {
    text.lines()
        .map(str::trim)
        .map(|line| LIST_MARKER.replace(line, ""))
        .filter(|line| line.contains(':') && line.starts_with('*'))
        .filter_map(|line| {
            let captures = CAREER_LINE.captures(&line)?;
            let title = captures[1].trim().trim_matches('*').trim();
            let description = captures[2].trim();
            if title.is_empty() || description.is_empty() {
                return None;
            }
            Some(CareerSuggestion {
                title: title.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
}

/// Parse the profile-analysis response into recommendations.
///
/// Accepts a JSON array, a single object, or an object with a `careers` array.
/// Items that are not careers are dropped. An empty result is reported as an
/// error so callers fall back.
pub fn parse_recommendations(text: &str) -> Result<Vec<CareerRecommendation>> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(extract_json_span(&cleaned))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("careers") {
            Some(Value::Array(items)) => items,
            _ => vec![Value::Object(map)],
        },
        other => {
            return Err(CoreError::unexpected_shape(format!(
                "expected an array of careers, got {other}"
            )));
        }
    };

    let careers: Vec<CareerRecommendation> = lenient::decode_each(items, "career");
    if careers.is_empty() {
        return Err(CoreError::unexpected_shape("no usable careers in model output"));
    }

    Ok(careers)
}

/// Parse the action-plan response. See [`ActionPlan::from_value`] for how
/// individual sections are recovered.
pub fn parse_action_plan(text: &str) -> Result<ActionPlan> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(extract_object_span(&cleaned))?;
    ActionPlan::from_value(value)
}
