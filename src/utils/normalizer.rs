/// Canonicalize raw text before vectorization.
///
/// Lowercases and trims leading/trailing whitespace. Internal whitespace is
/// left as is.
///
/// # Arguments
/// * `text` - raw text
///
/// # Returns
/// * `String` - normalized text, empty for empty input
#[inline]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// `normalize` for values that may be absent.
/// `None` yields an empty string.
#[inline]
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
