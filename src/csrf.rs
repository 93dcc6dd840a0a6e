//! Cross-site request forgery token lookup.

/// Cookie names checked in order; the chat page and the landing page were
/// served with different ones.
pub const CSRF_COOKIE_NAMES: &[&str] = &["csrf_token", "csrftoken"];
pub const CSRF_META_NAME: &str = "csrf-token";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Finds `name` in a `document.cookie` style string and percent-decodes it.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let value = cookie.trim().strip_prefix(name)?.strip_prefix('=')?;
        match urlencoding::decode(value) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(err) => {
                tracing::warn!("cookie {name} is not valid percent-encoding: {err}");
                Some(value.to_string())
            }
        }
    })
}

/// Cookie first, meta tag second. Empty values count as absent.
pub fn resolve_token(cookies: Option<&str>, meta_content: Option<&str>) -> Option<String> {
    let from_cookie = cookies.and_then(|cookies| {
        CSRF_COOKIE_NAMES
            .iter()
            .filter_map(|name| cookie_value(cookies, name))
            .find(|value| !value.is_empty())
    });

    from_cookie.or_else(|| {
        meta_content
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_decodes_cookie() {
        let cookies = "sessionid=abc; csrf_token=a%2Bb%3D; theme=dark";
        assert_eq!(cookie_value(cookies, "csrf_token").as_deref(), Some("a+b="));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn cookie_names_must_match_exactly() {
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
        assert_eq!(cookie_value("csrftokens=1", "csrftoken"), None);
    }

    #[test]
    fn prefers_cookie_then_meta() {
        assert_eq!(
            resolve_token(Some("csrftoken=fromcookie"), Some("frommeta")).as_deref(),
            Some("fromcookie")
        );
        assert_eq!(
            resolve_token(Some("other=1"), Some("frommeta")).as_deref(),
            Some("frommeta")
        );
        assert_eq!(
            resolve_token(Some("csrf_token="), Some("frommeta")).as_deref(),
            Some("frommeta")
        );
        assert_eq!(resolve_token(None, Some("  ")), None);
    }
}
