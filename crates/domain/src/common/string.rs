//! String conversion utilities.

/// Returns the trimmed value, or `None` when nothing but whitespace remains.
///
/// # Examples
///
/// ```
/// use trainercard_domain::common::non_blank;
///
/// assert_eq!(non_blank("  Tackle "), Some("Tackle"));
/// assert_eq!(non_blank("   "), None);
/// assert_eq!(non_blank(""), None);
/// ```
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Lower-cases a display name and replaces every whitespace character with `_`.
///
/// Returns `None` for blank names so callers can substitute their own default.
///
/// # Examples
///
/// ```
/// use trainercard_domain::common::file_slug;
///
/// assert_eq!(file_slug("Ash Ketchum"), Some("ash_ketchum".to_string()));
/// assert_eq!(file_slug("  "), None);
/// ```
pub fn file_slug(name: &str) -> Option<String> {
    non_blank(name)?;
    Some(
        name.to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect(),
    )
}
