//! Absolute links from site-relative hrefs.

fn has_http_scheme(href: &str) -> bool {
    let lower = href.get(..8).unwrap_or(href).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolves `href` against `origin`.
///
/// Absolute `http(s)` hrefs are returned unchanged; anything else is appended
/// to the origin with exactly one `/` between them.
pub fn resolve_href(origin: &str, href: &str) -> String {
    if has_http_scheme(href) {
        return href.to_string();
    }
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://wol.jw.org";

    #[test]
    fn absolute_unchanged() {
        assert_eq!(
            resolve_href(ORIGIN, "https://example.com/a"),
            "https://example.com/a"
        );
        assert_eq!(resolve_href(ORIGIN, "HTTP://Example.com"), "HTTP://Example.com");
    }

    #[test]
    fn rooted_path() {
        assert_eq!(
            resolve_href(ORIGIN, "/en/wol/d/r1/lp-e/1001070123"),
            "https://wol.jw.org/en/wol/d/r1/lp-e/1001070123"
        );
    }

    #[test]
    fn bare_path_and_empty() {
        assert_eq!(
            resolve_href(ORIGIN, "en/wol/b/r1/lp-e/nwtsty/1/1"),
            "https://wol.jw.org/en/wol/b/r1/lp-e/nwtsty/1/1"
        );
        assert_eq!(resolve_href(ORIGIN, ""), "https://wol.jw.org/");
    }

    #[test]
    fn non_ascii_prefix_does_not_panic() {
        assert_eq!(resolve_href(ORIGIN, "é/x"), "https://wol.jw.org/é/x");
    }
}
