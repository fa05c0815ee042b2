//! Resolution of redirect paths against the backend origin.
//!
//! Source and target paths are compared the way a browser would resolve them
//! relative to the page serving the form: relative paths, dot segments,
//! queries and fragments are all handled by the WHATWG URL parser.

use url::Url;

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlResolutionError {
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    #[error("Only HTTP and HTTPS origins are allowed")]
    UnsupportedProtocol,

    #[error("Cannot resolve '{input}': {reason}")]
    Unresolvable { input: String, reason: String },
}

/// Parses the origin the form is served from.
///
/// Anything after the authority is dropped, so `https://cms.example.org/neos/redirects`
/// becomes `https://cms.example.org/`.
///
/// # Errors
///
/// Returns [`UrlResolutionError::InvalidOrigin`] for malformed input and
/// [`UrlResolutionError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn parse_origin(input: &str) -> Result<Url, UrlResolutionError> {
    let mut url =
        Url::parse(input.trim()).map_err(|e| UrlResolutionError::InvalidOrigin(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlResolutionError::UnsupportedProtocol),
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Host and port of the origin, as `location.host` would report it.
pub fn origin_host(origin: &Url) -> String {
    match (origin.host_str(), origin.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Returns true if `host` designates the origin serving the form.
///
/// An empty host means "the current host" and therefore also matches.
pub fn is_current_host(host: &str, origin: &Url) -> bool {
    let host = host.trim();
    host.is_empty() || host.eq_ignore_ascii_case(&origin_host(origin))
}

/// Resolves a source or target path against `origin`.
///
/// Paths without a leading slash are taken relative to the origin root, so
/// `product-a` and `/product-a` resolve to the same URL. Absolute URLs are
/// kept as they are.
///
/// # Errors
///
/// Returns [`UrlResolutionError::Unresolvable`] if the input cannot be joined
/// onto the origin.
pub fn resolve_against(input: &str, origin: &Url) -> Result<Url, UrlResolutionError> {
    origin
        .join(input.trim())
        .map_err(|e| UrlResolutionError::Unresolvable {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Returns true if source and target resolve to the same path on `origin`.
///
/// Only the resolved paths are compared. Query strings, fragments and the
/// host an absolute URL points to do not distinguish them.
///
/// # Errors
///
/// See [`resolve_against`].
pub fn denotes_same_path(
    source: &str,
    target: &str,
    origin: &Url,
) -> Result<bool, UrlResolutionError> {
    let source = resolve_against(source, origin)?;
    let target = resolve_against(target, origin)?;

    Ok(source.path() == target.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        parse_origin("https://www.example.org").unwrap()
    }

    #[test]
    fn test_parse_origin_strips_path() {
        let url = parse_origin("https://cms.example.org/neos/management?x=1#top").unwrap();
        assert_eq!(url.as_str(), "https://cms.example.org/");
    }

    #[test]
    fn test_parse_origin_rejects_other_protocols() {
        assert_eq!(
            parse_origin("ftp://example.org"),
            Err(UrlResolutionError::UnsupportedProtocol)
        );
        assert!(matches!(
            parse_origin("not an origin"),
            Err(UrlResolutionError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_origin_host_includes_custom_port() {
        assert_eq!(origin_host(&origin()), "www.example.org");
        let local = parse_origin("http://localhost:8081").unwrap();
        assert_eq!(origin_host(&local), "localhost:8081");
        let default_port = parse_origin("https://www.example.org:443").unwrap();
        assert_eq!(origin_host(&default_port), "www.example.org");
    }

    #[test]
    fn test_is_current_host() {
        assert!(is_current_host("", &origin()));
        assert!(is_current_host("  ", &origin()));
        assert!(is_current_host("WWW.Example.org", &origin()));
        assert!(!is_current_host("shop.example.org", &origin()));
    }

    #[test]
    fn test_relative_and_absolute_paths_match() {
        assert!(denotes_same_path("product-a", "/product-a", &origin()).unwrap());
        assert!(denotes_same_path("a/b", "/a/./c/../b", &origin()).unwrap());
    }

    #[test]
    fn test_query_and_fragment_do_not_distinguish() {
        assert!(denotes_same_path("page?utm=1", "page#section", &origin()).unwrap());
    }

    #[test]
    fn test_different_paths() {
        assert!(!denotes_same_path("old", "new", &origin()).unwrap());
        assert!(!denotes_same_path("Page", "page", &origin()).unwrap());
    }

    #[test]
    fn test_target_on_same_origin_as_absolute_url() {
        assert!(denotes_same_path("page", "https://www.example.org/page", &origin()).unwrap());
    }

    #[test]
    fn test_target_on_other_origin_compares_path_only() {
        assert!(denotes_same_path("page", "https://other.example.org/page", &origin()).unwrap());
    }

    #[test]
    fn test_encoded_characters() {
        assert!(denotes_same_path("a b", "a%20b", &origin()).unwrap());
    }
}
