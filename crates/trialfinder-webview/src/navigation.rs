//! Host-level navigation policy.
//!
//! Runs before every in-document navigation, independently of the
//! interception scripts injected into the page.

/// Origins the widget may load in-document.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "https://widget.prxengage.com",
    "https://api.prxengage.com",
    "https://api-staging.prxengage.com",
];

/// Non-web prefixes the document itself uses.
pub const ALLOWED_DOCUMENT_PREFIXES: &[&str] = &["about:blank", "data:"];

/// What to do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the document navigate.
    Allow,
    /// Veto and hand the URL to the external opener.
    OpenExternally,
}

/// Decide where `url` should load.
///
/// Allow-listed origins and the document's own `about:blank` / `data:`
/// URLs stay in-document. Any other `http(s)` destination leaves the app.
/// Anything else is allowed.
pub fn decide(url: &str) -> NavigationDecision {
    let url = url.trim();

    if ALLOWED_DOCUMENT_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(url, prefix))
    {
        return NavigationDecision::Allow;
    }

    if ALLOWED_ORIGINS.iter().any(|origin| matches_origin(url, origin)) {
        return NavigationDecision::Allow;
    }

    if is_web_url(url) {
        NavigationDecision::OpenExternally
    } else {
        NavigationDecision::Allow
    }
}

/// `http://` or `https://`, any case.
pub fn is_web_url(url: &str) -> bool {
    starts_with_ignore_case(url, "http://") || starts_with_ignore_case(url, "https://")
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `origin` followed by a path, query, fragment or nothing. A bare prefix
/// match would let `https://widget.prxengage.com.evil.test` through.
fn matches_origin(url: &str, origin: &str) -> bool {
    if !starts_with_ignore_case(url, origin) {
        return false;
    }
    matches!(
        url[origin.len()..].chars().next(),
        None | Some('/' | '?' | '#')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_navigation_allowed(url: &str) -> bool {
        decide(url) == NavigationDecision::Allow
    }

    // -- Allowed in-document --

    #[test]
    fn allows_widget_origin() {
        assert!(is_navigation_allowed("https://widget.prxengage.com/asset.js"));
        assert!(is_navigation_allowed("https://widget.prxengage.com"));
        assert!(is_navigation_allowed("https://widget.prxengage.com?x=1"));
    }

    #[test]
    fn allows_api_origins() {
        assert!(is_navigation_allowed("https://api.prxengage.com/v1/trials"));
        assert!(is_navigation_allowed(
            "https://api-staging.prxengage.com/v1/trials#top"
        ));
    }

    #[test]
    fn allows_document_urls() {
        assert!(is_navigation_allowed("about:blank"));
        assert!(is_navigation_allowed("data:text/html,<p>hi</p>"));
        assert!(is_navigation_allowed("DATA:text/plain,x"));
    }

    #[test]
    fn origin_match_ignores_case() {
        assert!(is_navigation_allowed("HTTPS://Widget.PRXengage.com/a"));
    }

    // -- Routed to the external opener --

    #[test]
    fn vetoes_foreign_https() {
        assert_eq!(
            decide("https://evil.example.com"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            decide("https://clinicaltrials.gov/study/NCT000"),
            NavigationDecision::OpenExternally
        );
    }

    #[test]
    fn vetoes_plain_http() {
        assert_eq!(
            decide("http://widget.prxengage.com/asset.js"),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            decide("http://localhost:8080"),
            NavigationDecision::OpenExternally
        );
    }

    #[test]
    fn vetoes_lookalike_origins() {
        assert!(!is_navigation_allowed("https://widget.prxengage.com.evil.test/"));
        assert!(!is_navigation_allowed("https://widget.prxengage.community"));
        assert!(!is_navigation_allowed("https://api.prxengage.com:8443/x"));
    }

    // -- Fail-open for everything else --

    #[test]
    fn non_web_schemes_are_allowed() {
        assert!(is_navigation_allowed("mailto:study@example.org"));
        assert!(is_navigation_allowed("tel:+15555550100"));
        assert!(is_navigation_allowed("about:srcdoc"));
        assert!(is_navigation_allowed("blob:https://widget.prxengage.com/123"));
        assert!(is_navigation_allowed(""));
    }

    #[test]
    fn web_url_detection() {
        assert!(is_web_url("https://a.b"));
        assert!(is_web_url("HTTP://a.b"));
        assert!(!is_web_url("ftp://a.b"));
        assert!(!is_web_url("https:"));
    }
}
