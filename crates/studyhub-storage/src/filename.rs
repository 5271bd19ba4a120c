//! Uploaded file name sanitization.

/// Sanitize an uploaded file name for storage.
///
/// Strips path components and reduces the name to ASCII alphanumerics,
/// dots, dashes, and underscores. Returns `"file"` when nothing safe
/// remains, so callers always get a usable name.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .trim_start_matches('.');

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_' || c == '.') {
        "file".to_string()
    } else {
        cleaned
    }
}
