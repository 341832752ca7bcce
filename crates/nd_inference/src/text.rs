//! Small text helpers shared by the pipeline stages.

/// Returns the first field that holds a non-empty string, or `""` when
/// none does. Callers pass the fields in priority order; an empty string
/// counts as absent, whitespace does not.
pub(crate) fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> &'a str {
    fields
        .iter()
        .filter_map(|field| field.as_deref())
        .find(|text| !text.is_empty())
        .unwrap_or("")
}

/// Truncates to at most `max_chars` characters without splitting a
/// UTF-8 code point.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
