use crate::config::IDENTIFIER_SUBSTITUTIONS;

/// Removes the last extension of `file_name`.
///
/// Leading dots do not start an extension: `.png` and `..png` are returned
/// unchanged while `.hidden.png` becomes `.hidden`.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if file_name[..dot].bytes().any(|b| b != b'.') => &file_name[..dot],
        _ => file_name,
    }
}

/// Method name for `file_name`: extension stripped, then `@` -> `$` and
/// `UI` -> `SM` on every occurrence, in that order.
pub fn derive_identifier(file_name: &str) -> String {
    IDENTIFIER_SUBSTITUTIONS
        .iter()
        .fold(strip_extension(file_name).to_string(), |name, (from, to)| {
            name.replace(from, to)
        })
}
