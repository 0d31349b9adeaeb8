//! Default destination filename derivation from a URL.

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path has no usable
/// segment (root, `.` or `..`). The query string is not part of the path and
/// is dropped automatically.
pub fn filename_from_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let segment = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    let name = sanitize_filename(segment);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Like [`filename_from_url`] with a fixed fallback for URLs that carry no
/// usable path segment.
pub fn default_filename(raw: &str) -> String {
    filename_from_url(raw).unwrap_or_else(|| "download.bin".to_string())
}

/// Replaces path separators and control characters with `_` and trims leading
/// and trailing dots and spaces. Truncates to 255 bytes (NAME_MAX) at a char
/// boundary.
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');

    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut cut = NAME_MAX;
    while cut > 0 && !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    trimmed[..cut].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_wins() {
        assert_eq!(
            filename_from_url("https://example.com/a/b/archive.tar.gz").as_deref(),
            Some("archive.tar.gz")
        );
        assert_eq!(
            filename_from_url("https://example.com/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn query_is_dropped() {
        assert_eq!(
            filename_from_url("https://example.com/file.zip?token=abc").as_deref(),
            Some("file.zip")
        );
    }

    #[test]
    fn root_dot_and_garbage_are_rejected() {
        assert_eq!(filename_from_url("https://example.com/"), None);
        assert_eq!(filename_from_url("https://example.com/.."), None);
        assert_eq!(filename_from_url("not a url"), None);
    }

    #[test]
    fn default_falls_back() {
        assert_eq!(default_filename("https://example.com/"), "download.bin");
        assert_eq!(default_filename("https://example.com/x.bin"), "x.bin");
    }

    #[test]
    fn sanitize_replaces_separators_and_trims() {
        assert_eq!(sanitize_filename("a/b\\c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_filename("..hidden."), "hidden");
        assert_eq!(sanitize_filename("name\twith\ncontrol"), "name_with_control");
    }

    #[test]
    fn sanitize_truncates_at_char_boundary() {
        let long = "あ".repeat(200); // 600 bytes
        let out = sanitize_filename(&long);
        assert!(out.len() <= 255);
        assert!(out.is_char_boundary(out.len()));
    }
}
