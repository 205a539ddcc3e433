//! Text cleaning for values substituted into paths

/// Symbols replaced with an underscore when a tag value becomes part of a path
pub const FORBIDDEN_SYMBOLS: &[char] = &['*', '.', ',', '"', '\\', '/', '|', '[', ']', ':', ';', ' '];

/// Clean and standardize a tag value for use in a file or folder name.
///
/// Every forbidden symbol is replaced with `_` and the result is lowercased.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("B30f smooth"), "b30f_smooth");
/// assert_eq!(clean_text("1.25"), "1_25");
/// ```
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if FORBIDDEN_SYMBOLS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect::<String>()
        .to_lowercase()
}
