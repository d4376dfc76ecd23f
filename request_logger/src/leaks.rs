//! Detection of credentials leaked through `x-e-*` headers.
//!
//! Clients forward their environment as `x-e-<NAME>` headers. Any forwarded
//! variable whose name looks like an API key is reported back, masked.
use serde_json::{Map, Value};
use std::borrow::Cow;

const LEAK_PREFIX: &str = "x-e-";
const VISIBLE_CHARS: usize = 3;
const MAX_MASK_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeakFinding {
    pub name: String,
    pub masked_value: String,
}

/// Scans headers in arrival order.
pub(crate) fn scan_headers(headers: &Map<String, Value>) -> Vec<LeakFinding> {
    headers
        .iter()
        .filter_map(|(header, value)| {
            let name = strip_leak_prefix(header)?;
            let lowered = name.to_lowercase();
            (lowered.contains("api") || lowered.contains("key")).then(|| LeakFinding {
                name: name.to_string(),
                masked_value: mask_secret(&header_text(value)),
            })
        })
        .collect()
}

/// Keeps the first three characters and replaces up to ten of the rest with `*`.
pub(crate) fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let stars = value
        .chars()
        .count()
        .saturating_sub(VISIBLE_CHARS)
        .min(MAX_MASK_CHARS);

    value
        .chars()
        .take(VISIBLE_CHARS)
        .chain(std::iter::repeat('*').take(stars))
        .collect()
}

fn strip_leak_prefix(header: &str) -> Option<&str> {
    let prefix = header.get(..LEAK_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(LEAK_PREFIX)
        .then(|| &header[LEAK_PREFIX.len()..])
}

fn header_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}
