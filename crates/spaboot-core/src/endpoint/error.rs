//! Error type for endpoint derivation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// API URL is set, is not the same-origin sentinel, and carries no
    /// `http`/`https` token to rewrite.
    #[error("invalid configuration: API URL {api_url:?} has no http or https scheme")]
    InvalidConfiguration { api_url: String },
}
