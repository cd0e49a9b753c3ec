//! Forgiving decoders for numeric fields arriving from forms and stored documents.
//!
//! Upstream records are loosely typed: numbers may arrive as JSON numbers, as strings
//! with thousands separators, or as junk. Anything that does not parse to a finite
//! number decodes as `None` so the engine can apply its defaults.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a string-like value into a finite `f64`.
///
/// Trims whitespace, strips `,` separators and rejects anything containing letters.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn coerce(value: Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_number(&text),
        _ => None,
    }
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(coerce))
}

/// Household counts round down; negative counts are treated as unknown.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(coerce)
        .filter(|count| *count >= 0.0)
        .map(|count| count.floor().min(u32::MAX as f64) as u32))
}

/// Free text that is blank after trimming is treated as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
