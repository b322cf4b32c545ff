//! Configuration document with a structured fast path and a scanning fallback.

use serde_json::Value;

use crate::scan;

/// Parsed configuration text.
///
/// Well-formed JSON is held as a [`Value`] tree (key order preserved, so
/// "first occurrence" means the same thing as in the raw text). Anything
/// `serde_json` rejects is kept verbatim and answered by the [`scan`]
/// functions, so hand-edited files with trailing commas or truncated tails
/// still yield whatever values can be found.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigDocument {
    Structured(Value),
    Raw(String),
}

impl ConfigDocument {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::Structured(value),
            Err(err) => {
                tracing::debug!(error = %err, "configuration is not valid JSON; scanning text");
                Self::Raw(text.to_string())
            }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// First value stored under `key`, anywhere in the document.
    ///
    /// Strings come back without quotes; numbers and booleans in their
    /// textual form. Objects and arrays are not scalars.
    pub fn scalar(&self, key: &str) -> Option<String> {
        self.array_element(key, 0)
    }

    /// The `occurrence`-th (0-based) value stored under `key`, in document order.
    pub fn array_element(&self, key: &str, occurrence: usize) -> Option<String> {
        match self {
            Self::Structured(root) => find_all(root, key)
                .into_iter()
                .nth(occurrence)
                .and_then(scalar_text),
            Self::Raw(text) => scan::extract_array_element(text, key, occurrence),
        }
    }

    /// Object stored under the first `key`, as its own document.
    pub fn block(&self, key: &str) -> Option<ConfigDocument> {
        match self {
            Self::Structured(root) => find_all(root, key)
                .into_iter()
                .next()
                .filter(|value| value.is_object())
                .map(|value| Self::Structured(value.clone())),
            Self::Raw(text) => scan::extract_block(text, key).map(|block| Self::Raw(block.into())),
        }
    }

    /// Objects inside the array stored under the first `key`.
    pub fn objects(&self, key: &str) -> Option<Vec<ConfigDocument>> {
        match self {
            Self::Structured(root) => {
                let Value::Array(items) = find_all(root, key).into_iter().next()? else {
                    return None;
                };
                Some(
                    items
                        .iter()
                        .filter(|item| item.is_object())
                        .map(|item| Self::Structured(item.clone()))
                        .collect(),
                )
            }
            Self::Raw(text) => scan::extract_array_objects(text, key).map(|objects| {
                objects
                    .into_iter()
                    .map(|object| Self::Raw(object.into()))
                    .collect()
            }),
        }
    }

    /// Number of values stored under `key`.
    pub fn occurrences(&self, key: &str) -> usize {
        match self {
            Self::Structured(root) => find_all(root, key).len(),
            Self::Raw(text) => scan::count_occurrences(text, key),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.occurrences(key) > 0
    }
}

/// Every value stored under `key`, depth-first in document order.
fn find_all<'a>(root: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut found = Vec::new();
    collect(root, key, &mut found);
    found
}

fn collect<'a>(value: &'a Value, key: &str, found: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                if name == key {
                    found.push(child);
                }
                collect(child, key, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, key, found);
            }
        }
        _ => {}
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Object(_) | Value::Array(_) => None,
    }
}
