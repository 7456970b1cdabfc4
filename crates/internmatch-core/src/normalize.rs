//! Text normalization shared by catalog preprocessing and query handling.

/// Lowercases `text`, replaces every character outside `[a-z0-9]` and
/// whitespace with a space, and trims the ends. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() { c } else { ' ' })
        .collect();
    cleaned.trim().to_string()
}

/// `None` normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
