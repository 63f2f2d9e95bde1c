use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The path should start with '/': {0:?}")]
    InvalidPath(String),
    #[error("Couldn't build a URL from {0:?}")]
    InvalidUrl(String),
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("Invalid header value for {0}")]
    InvalidHeaderValue(String),
    #[error("reqwest error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The response body is not a JSON object: {0:?}")]
    InvalidBody(String),
}
