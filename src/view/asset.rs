//! Asset path resolution
//!
//! Visual sources in the content files are opaque paths. At render time they
//! are joined onto the asset base the frontend was built with, so the same
//! content works when the site is served from a sub-path.

/// Resolve `src` against `base`
///
/// Absolute URLs (`http://`, `https://`, protocol-relative `//`) and `data:`
/// URIs are returned unchanged. Everything else is joined onto `base` with
/// exactly one `/` between them. An empty base behaves like `/`.
///
/// ```rust
/// use folio::view::resolve_asset;
///
/// assert_eq!(resolve_asset("/", "img/a.png"), "/img/a.png");
/// assert_eq!(resolve_asset("/folio/", "/img/a.png"), "/folio/img/a.png");
/// assert_eq!(resolve_asset("/", "https://cdn.example/a.png"), "https://cdn.example/a.png");
/// ```
pub fn resolve_asset(base: &str, src: &str) -> String {
    if is_absolute(src) {
        return src.to_string();
    }

    let base = base.trim_end_matches('/');
    let src = src.trim_start_matches('/');

    format!("{}/{}", base, src)
}

fn is_absolute(src: &str) -> bool {
    let lower = src.get(..8).unwrap_or(src).to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:")
        || src.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_join_with_single_slash() {
        assert_eq!(resolve_asset("/", "img/a.png"), "/img/a.png");
        assert_eq!(resolve_asset("/", "/img/a.png"), "/img/a.png");
        assert_eq!(resolve_asset("/base", "img/a.png"), "/base/img/a.png");
        assert_eq!(resolve_asset("/base/", "/img/a.png"), "/base/img/a.png");
        assert_eq!(resolve_asset("/base//", "//img/a.png"), "//img/a.png");
    }

    #[test]
    fn test_empty_base() {
        assert_eq!(resolve_asset("", "img/a.png"), "/img/a.png");
    }

    #[test]
    fn test_absolute_sources_pass_through() {
        for src in [
            "http://example.com/a.png",
            "HTTPS://example.com/a.png",
            "//cdn.example.com/a.png",
            "data:image/png;base64,iVBORw0KGgo=",
        ] {
            assert_eq!(resolve_asset("/base/", src), src);
        }
    }

    #[test]
    fn test_absolute_base_url() {
        assert_eq!(
            resolve_asset("https://sw-oasen.github.io/portfolio/", "img/a.png"),
            "https://sw-oasen.github.io/portfolio/img/a.png"
        );
    }
}
