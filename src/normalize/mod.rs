//! Result normalization
//!
//! Helpers that pull the relevant sub-tree out of a decoded response and fix
//! up the shapes produced by the XML decoder.
//!
//! The XML decoder only produces arrays for repeated siblings, so a list with
//! a single element arrives as a bare object. List-returning endpoints must
//! call [`ensure_list`] on their extracted value.

use serde_json::Value;

/// Property under which the full-series record carries its episodes
pub const EPISODES_KEY: &str = "Episodes";

/// Extract a value using a simple dot-notation path such as `Data.Series`.
///
/// Returns `None` when any segment is missing or the value found is `null`.
pub fn extract_path(value: &Value, path: &str) -> Option<Value> {
    let mut current = value;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        current = current.get(part)?;
    }

    if current.is_null() {
        None
    } else {
        Some(current.clone())
    }
}

/// Take ownership of the value at `path`, leaving `null` in its place
pub fn take_path(value: &mut Value, path: &str) -> Option<Value> {
    let mut current = value;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        current = current.get_mut(part)?;
    }

    match current.take() {
        Value::Null => None,
        v => Some(v),
    }
}

/// Normalize a possibly-singular value into a list.
///
/// Absent values stay absent, arrays pass through unchanged, anything else is
/// wrapped in a one-element array.
pub fn ensure_list(value: Option<Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(Value::Array(items)),
        Some(single) => Some(Value::Array(vec![single])),
    }
}

/// Apply [`ensure_list`] to a field of an object in place
pub fn ensure_list_field(object: &mut Value, field: &str) {
    if let Some(map) = object.as_object_mut() {
        if let Some(slot) = map.get_mut(field) {
            *slot = ensure_list(Some(slot.take())).unwrap_or(Value::Null);
        }
    }
}

/// Join the episode collection of a full-series document onto its series.
///
/// Given `{"Data": {"Series": {...}, "Episode": [...]}}`, returns the series
/// object with an added `Episodes` property holding the episode list. Nothing
/// else on the series is touched. Returns `None` when the document has no
/// series.
pub fn attach_episodes(mut document: Value) -> Option<Value> {
    let episodes = ensure_list(take_path(&mut document, "Data.Episode"));
    let mut series = take_path(&mut document, "Data.Series")?;

    if let Some(map) = series.as_object_mut() {
        map.insert(EPISODES_KEY.to_string(), episodes.unwrap_or(Value::Null));
    }
    Some(series)
}

/// Split a pipe-delimited list such as `|Drama|Comedy|`.
///
/// One leading and one trailing pipe are removed before splitting.
pub fn parse_pipe_list(list: &str) -> Vec<String> {
    let list = list.strip_prefix('|').unwrap_or(list);
    let list = list.strip_suffix('|').unwrap_or(list);
    list.split('|').map(str::to_string).collect()
}
