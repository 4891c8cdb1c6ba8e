/// Last path component of a client-supplied filename, trimmed.
///
/// Both `/` and `\` count as separators since browsers on Windows may send
/// full local paths.
pub fn base_name(original: &str) -> &str {
    original.rsplit(['/', '\\']).next().unwrap_or(original).trim()
}

/// Splits `name` into stem and extension at the last `.`.
///
/// Returns `None` when either side is empty, so dotfiles like `.png` and
/// names like `photo.` have no extension.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some((stem, ext)),
        _ => None,
    }
}

/// `image/PNG; charset=binary` -> `image/png`
pub fn normalize_mime(mime: &str) -> String {
    mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Comma-separated list into trimmed, lowercased entries. Empty entries are
/// dropped and a leading `.` is stripped so `.JPG` and `jpg` are the same.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}
