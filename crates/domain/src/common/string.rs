//! String conversion utilities.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Optional scenario metadata (author, date) is stored as an empty string
/// when unset, because the file format always writes the field.
///
/// # Examples
///
/// ```
/// use tactica_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("editor"), Some("editor"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Converts an optional string into the stored form, where `None` is empty.
///
/// # Examples
///
/// ```
/// use tactica_domain::common::empty_if_none;
///
/// assert_eq!(empty_if_none(Some("2024-01-01")), "2024-01-01");
/// assert_eq!(empty_if_none(None::<String>), "");
/// ```
pub fn empty_if_none(value: Option<impl Into<String>>) -> String {
    value.map(Into::into).unwrap_or_default()
}
