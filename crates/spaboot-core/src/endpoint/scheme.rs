//! Scheme token detection.

/// HTTP scheme token found in an API URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeToken {
    Http,
    Https,
}

impl SchemeToken {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeToken::Http => "http",
            SchemeToken::Https => "https",
        }
    }

    /// Websocket scheme matching this token: `ws` for `http`, `wss` for `https`.
    pub fn websocket_scheme(self) -> &'static str {
        match self {
            SchemeToken::Http => "ws",
            SchemeToken::Https => "wss",
        }
    }
}

/// Finds the first `http` token anywhere in `s`.
///
/// The token is `https` when the `http` occurrence is immediately followed by
/// `s`. Matching is case-sensitive. Returns the byte offset of the token.
pub fn find_scheme_token(s: &str) -> Option<(usize, SchemeToken)> {
    let start = s.find("http")?;
    let token = if s[start + "http".len()..].starts_with('s') {
        SchemeToken::Https
    } else {
        SchemeToken::Http
    };
    Some((start, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https() {
        assert_eq!(
            find_scheme_token("http://example.com/api"),
            Some((0, SchemeToken::Http))
        );
        assert_eq!(
            find_scheme_token("https://example.com/api"),
            Some((0, SchemeToken::Https))
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            find_scheme_token("http://a/?next=https://b"),
            Some((0, SchemeToken::Http))
        );
        assert_eq!(
            find_scheme_token("//proxy/https/http"),
            Some((8, SchemeToken::Https))
        );
    }

    #[test]
    fn missing_or_wrong_case() {
        assert_eq!(find_scheme_token("ftp://example.com/api"), None);
        assert_eq!(find_scheme_token("HTTP://example.com/api"), None);
        assert_eq!(find_scheme_token(""), None);
    }

    #[test]
    fn token_at_end() {
        assert_eq!(find_scheme_token("x-http"), Some((2, SchemeToken::Http)));
    }

    #[test]
    fn websocket_schemes() {
        assert_eq!(SchemeToken::Http.websocket_scheme(), "ws");
        assert_eq!(SchemeToken::Https.websocket_scheme(), "wss");
    }
}
