//! Websocket endpoint derivation.
//!
//! The front-end talks to the backend over two endpoints: request/response
//! calls go to the API base URL, persistent socket traffic to the websocket
//! base URL. Only the API URL is configured; the websocket URL is derived
//! from it here.

mod error;
mod path;
mod scheme;

pub use error::EndpointError;
pub use path::{find_path_segment, replace_path_segment};
pub use scheme::{find_scheme_token, SchemeToken};

/// API URL meaning "same origin as the page" (production deployment).
pub const API_SENTINEL: &str = "/api";

/// Websocket path used for same-origin deployments.
pub const SOCKET_SENTINEL: &str = "/socket/websocket";

const API_SEGMENT: &str = "/api";
const SOCKET_SEGMENT: &str = "/socket/websocket";

/// Derives the websocket base URL from the API base URL.
///
/// - absent or empty `api_url` derives to `None`
/// - the sentinel `/api` derives to `/socket/websocket`; scheme and host are
///   supplied by the browser at connection time
/// - otherwise the first `http`/`https` token becomes `ws`/`wss` and the
///   first `/api` path segment becomes `/socket/websocket`
///
/// # Errors
///
/// [`EndpointError::InvalidConfiguration`] when the URL has no `http` token.
///
/// # Examples
///
/// - `derive_websocket_url(Some("https://example.com/api"))` → `Ok(Some("wss://example.com/socket/websocket"))`
/// - `derive_websocket_url(Some("/api"))` → `Ok(Some("/socket/websocket"))`
pub fn derive_websocket_url(api_url: Option<&str>) -> Result<Option<String>, EndpointError> {
    let api_url = match api_url {
        Some(u) if !u.is_empty() => u,
        _ => return Ok(None),
    };

    if api_url == API_SENTINEL {
        return Ok(Some(SOCKET_SENTINEL.to_string()));
    }

    let (at, token) =
        find_scheme_token(api_url).ok_or_else(|| EndpointError::InvalidConfiguration {
            api_url: api_url.to_string(),
        })?;

    let mut rewritten = String::with_capacity(api_url.len());
    rewritten.push_str(&api_url[..at]);
    rewritten.push_str(token.websocket_scheme());
    rewritten.push_str(&api_url[at + token.as_str().len()..]);

    Ok(Some(replace_path_segment(
        &rewritten,
        API_SEGMENT,
        SOCKET_SEGMENT,
    )))
}

/// True for same-origin relative URLs such as the sentinels.
pub fn is_relative(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}
