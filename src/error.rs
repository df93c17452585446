//! Frontend Errors

use thiserror::Error;

/// Everything that can make a favorite toggle fail.
///
/// The controller collapses all of these into a single "toggle failed"
/// outcome; the variants only exist for the log line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FavoriteError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered HTTP {0}")]
    Http(u16),

    #[error("could not decode response: {0}")]
    Parse(String),

    #[error("unexpected favorite status {0:?}")]
    UnexpectedStatus(String),

    #[error("no CSRF token field on the page")]
    MissingCsrfToken,

    #[error("favorite control has no resource id")]
    MissingResourceId,

    #[error("missing DOM element: {0}")]
    MissingElement(&'static str),

    #[error("invalid favorite config: {0}")]
    Config(String),
}

impl From<gloo_net::Error> for FavoriteError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FavoriteError::Parse(e.to_string()),
            other => FavoriteError::Network(other.to_string()),
        }
    }
}
