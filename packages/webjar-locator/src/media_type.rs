//! File-suffix to content-type mapping.
//!
//! Suffixes are exact, case-sensitive tokens including the leading dot, so
//! `style.css` maps to `text/css` while `STYLE.CSS` falls back to plain text.

/// Content type used for unknown suffixes and suffix-less paths.
pub const FALLBACK_CONTENT_TYPE: &str = "text/plain";

const MEDIA_TYPES: &[(&str, &str)] = &[
    (".css", "text/css"),
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".ico", "image/x-icon"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".raml", "application/raml+yaml"),
    (".otf", "font/opentype"),
    (".ttf", "font/truetype"),
    (".woff", "font/x-font-woff"),
    (".woff2", "font/x-font-woff2"),
];

/// Returns the suffix of `file_path` from its last `.` to the end.
pub fn file_suffix(file_path: &str) -> Option<&str> {
    file_path.rfind('.').map(|i| &file_path[i..])
}

/// Maps a file suffix to a content type, falling back to `text/plain`.
pub fn content_type(suffix: Option<&str>) -> &'static str {
    suffix
        .and_then(|suffix| {
            MEDIA_TYPES
                .iter()
                .find(|(known, _)| *known == suffix)
                .map(|(_, media_type)| *media_type)
        })
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

/// Content type for a file path, derived from its suffix.
pub fn content_type_for(file_path: &str) -> &'static str {
    content_type(file_suffix(file_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_suffix() {
        for (suffix, expected) in MEDIA_TYPES {
            assert_eq!(content_type(Some(suffix)), *expected);
        }
    }

    #[test]
    fn test_unknown_suffix_is_plain_text() {
        assert_eq!(content_type(Some(".js")), "text/plain");
        assert_eq!(content_type(Some(".")), "text/plain");
        assert_eq!(content_type(None), "text/plain");
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert_eq!(content_type(Some(".CSS")), "text/plain");
        assert_eq!(content_type_for("logo.PNG"), "text/plain");
    }

    #[test]
    fn test_file_suffix_uses_last_dot() {
        assert_eq!(file_suffix("fonts/icons.woff2"), Some(".woff2"));
        assert_eq!(file_suffix("jquery.min.css"), Some(".css"));
        assert_eq!(file_suffix("v1.2/README"), Some(".2/README"));
        assert_eq!(file_suffix("LICENSE"), None);
    }

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(content_type_for("css/bootstrap.css"), "text/css");
        assert_eq!(content_type_for("api/spec.raml"), "application/raml+yaml");
        assert_eq!(content_type_for("LICENSE"), "text/plain");
    }
}
