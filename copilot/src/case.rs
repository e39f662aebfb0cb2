//! Recursive key case conversion: snake_case for exported documents, and
//! camelCase for wire documents on their way into the typed model.
//!
//! Word boundaries follow the common change-case rules: a lowercase letter or
//! digit followed by an uppercase letter, an acronym followed by a capitalized
//! word (`HTTPServer` -> `http_server`), and any run of non-alphanumeric
//! characters. Leading and trailing separators are dropped.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

use serde_json::{Map, Value};

/// Convert a single key to snake_case.
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            pending_separator = !out.is_empty();
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                pending_separator = !out.is_empty();
            }
        }
        if pending_separator {
            out.push('_');
            pending_separator = false;
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Rewrite every object key in `value` to snake_case, descending into arrays
/// and nested objects. String values are left untouched.
#[must_use]
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (to_snake_case(&k), snake_case_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_keys).collect()),
        other => other,
    }
}

/// Convert a snake_case key to camelCase. Segments after the first have
/// their first character uppercased; empty segments are dropped.
#[must_use]
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, segment) in key.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Rewrite snake_case object keys in `value` to camelCase, descending into
/// arrays and nested objects.
///
/// A key is renamed only when [`to_snake_case`] maps the result back to the
/// same key, so `_id`, `level_01` and keys that are already camelCase pass
/// through. When a document spells a key both ways, the snake_case value wins.
#[must_use]
pub fn camel_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut kept = Map::new();
            let mut renamed = Vec::new();
            for (key, value) in map {
                let value = camel_case_keys(value);
                match camel_key(&key) {
                    Some(camel) => renamed.push((camel, value)),
                    None => {
                        kept.insert(key, value);
                    }
                }
            }
            for (camel, value) in renamed {
                if kept.insert(camel.clone(), value).is_some() {
                    tracing::debug!(key = %camel, "snake_case spelling replaces duplicate camelCase key");
                }
            }
            Value::Object(kept)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camel_case_keys).collect()),
        other => other,
    }
}

fn camel_key(key: &str) -> Option<String> {
    if !key.contains('_') || key.starts_with('_') {
        return None;
    }
    let camel = to_camel_case(key);
    (to_snake_case(&camel) == key).then_some(camel)
}
