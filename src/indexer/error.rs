use reqwest::{
    header::{InvalidHeaderName, InvalidHeaderValue},
    StatusCode,
};
use thiserror::Error;

/// The indexer client could not be put together. Raised before any request goes out.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid indexer url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("indexer url {0:?} cannot carry a path")]
    UrlCannotBeABase(String),
    #[error("invalid authentication header name {name:?}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },
    #[error("credential is not a valid header value")]
    InvalidHeaderValue(#[source] InvalidHeaderValue),
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("indexer responded {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },
    #[error("failed to decode asset balances from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
