//! Substring scanner for JSON-shaped text that may not be valid JSON.
//!
//! Keys are matched literally as `"key":`. The scanner never fails; anything
//! it cannot make sense of reads as absent.

/// Value of the first `"key":` in `text`.
///
/// A quoted value yields the text between its quotes. An unquoted value
/// (number, boolean) yields the trimmed text up to the next `,` or `}`.
pub fn extract_scalar(text: &str, key: &str) -> Option<String> {
    extract_array_element(text, key, 0)
}

/// Value of the `occurrence`-th (0-based) `"key":` in `text`.
///
/// Used for keys repeated inside an array of objects, such as `petName`.
pub fn extract_array_element(text: &str, key: &str, occurrence: usize) -> Option<String> {
    let pattern = key_pattern(key);
    let (index, _) = text.match_indices(&pattern).nth(occurrence)?;
    scalar_at(text, index + pattern.len())
}

/// The `{...}` object that is the value of the first `"key":`, braces included.
///
/// Braces are matched by depth counting. `None` when the value is not an
/// object or the object never closes.
pub fn extract_block<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let open = value_start(text, key, '{')?;
    let close = find_matching_brace(text, open)?;
    Some(&text[open..=close])
}

/// Index of the `}` that closes the `{` at `open`.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// The `{...}` objects inside the `[...]` array that is the value of the
/// first `"key":`.
///
/// The array ends at the first `]`, so nested arrays are not supported.
/// Objects whose braces never close are dropped.
pub fn extract_array_objects<'a>(text: &'a str, key: &str) -> Option<Vec<&'a str>> {
    let open = value_start(text, key, '[')?;
    let close = open + text[open..].find(']')?;
    let body = &text[..close];

    let mut objects = Vec::new();
    let mut cursor = open + 1;
    while let Some(offset) = body[cursor..].find('{') {
        let start = cursor + offset;
        let Some(end) = find_matching_brace(body, start) else {
            break;
        };
        objects.push(&body[start..=end]);
        cursor = end + 1;
    }
    Some(objects)
}

/// Number of times `"key":` occurs in `text`.
pub fn count_occurrences(text: &str, key: &str) -> usize {
    text.matches(&key_pattern(key)).count()
}

fn key_pattern(key: &str) -> String {
    format!("\"{key}\":")
}

/// Index of `opener` when it is the first non-whitespace character after the
/// first `"key":`.
fn value_start(text: &str, key: &str, opener: char) -> Option<usize> {
    let pattern = key_pattern(key);
    let key_end = text.find(&pattern)? + pattern.len();
    let rest = &text[key_end..];
    let value = rest.trim_start();
    value
        .starts_with(opener)
        .then(|| key_end + rest.len() - value.len())
}

fn scalar_at(text: &str, value_start: usize) -> Option<String> {
    let rest = &text[value_start..];
    let trimmed = rest.trim_start();

    if let Some(quoted) = trimmed.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some(quoted[..end].to_string());
    }

    let end = rest.find([',', '}'])?;
    Some(rest[..end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "parentPassword": "hunter2",
        "totalPlayTime": 42,
        "petRevival": true,
        "availableActions": {
            "feed": { "cooldown": 8 },
            "goToSleep": { "cooldown": 12 }
        },
        "pets": [
            { "petName": "Luka", "petDescription": "A curious cat" },
            { "petName": "Anthony", "petDescription": "Loves naps" }
        ]
    }"#;

    #[test]
    fn scalars_quoted_and_unquoted() {
        assert_eq!(extract_scalar(SAMPLE, "parentPassword").as_deref(), Some("hunter2"));
        assert_eq!(extract_scalar(SAMPLE, "totalPlayTime").as_deref(), Some("42"));
        assert_eq!(extract_scalar(SAMPLE, "petRevival").as_deref(), Some("true"));
        assert_eq!(extract_scalar(SAMPLE, "resetPlayTime"), None);
    }

    #[test]
    fn unquoted_value_ends_at_closing_brace() {
        let block = extract_block(SAMPLE, "feed").unwrap();
        assert_eq!(block, r#"{ "cooldown": 8 }"#);
        assert_eq!(extract_scalar(block, "cooldown").as_deref(), Some("8"));
    }

    #[test]
    fn block_is_balanced() {
        let block = extract_block(SAMPLE, "availableActions").unwrap();
        assert!(block.starts_with('{') && block.ends_with('}'));
        assert!(block.contains("goToSleep"));
        assert!(!block.contains("pets"));
    }

    #[test]
    fn unterminated_block_is_absent() {
        assert_eq!(extract_block(r#"{"availableActions": {"feed": {"#, "availableActions"), None);
        assert_eq!(extract_block(r#"{"availableActions": 3}"#, "availableActions"), None);
    }

    #[test]
    fn block_must_be_the_keys_own_value() {
        let text = r#"{"availableActions":{"feed":3,"goToSleep":{"cooldown":12},},}"#;
        assert_eq!(extract_block(text, "feed"), None);
        assert_eq!(extract_block(text, "goToSleep"), Some(r#"{"cooldown":12}"#));
        assert_eq!(extract_array_objects(r#"{"pets": 0, "other": [{}]}"#, "pets"), None);
    }

    #[test]
    fn array_elements_by_occurrence() {
        assert_eq!(extract_array_element(SAMPLE, "petName", 0).as_deref(), Some("Luka"));
        assert_eq!(extract_array_element(SAMPLE, "petName", 1).as_deref(), Some("Anthony"));
        assert_eq!(extract_array_element(SAMPLE, "petName", 2), None);
        assert_eq!(count_occurrences(SAMPLE, "petDescription"), 2);
    }

    #[test]
    fn array_objects_in_order() {
        let objects = extract_array_objects(SAMPLE, "pets").unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(extract_scalar(objects[1], "petName").as_deref(), Some("Anthony"));

        assert_eq!(extract_array_objects(r#"{"pets": []}"#, "pets"), Some(vec![]));
        assert_eq!(extract_array_objects(r#"{"pets": [{"petName": "Luka"}"#, "pets"), None);
        assert_eq!(extract_array_objects(SAMPLE, "inventory"), None);
    }

    #[test]
    fn malformed_text_reads_as_absent() {
        assert_eq!(extract_scalar("", "feed"), None);
        assert_eq!(extract_scalar(r#"{"name": "unterminated"#, "name"), None);
        assert_eq!(extract_scalar(r#"{"count": 12"#, "count"), None);
        assert_eq!(find_matching_brace("abc", 1), None);
    }
}
