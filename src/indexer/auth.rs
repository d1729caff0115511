use std::fmt::Display;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::env::obfuscate;

use super::ConfigurationError;

/// Header the indexer reads its access token from.
pub const TOKEN_HEADER: &str = "X-Indexer-API-Token";

/// How we authenticate against the indexer. Exactly one mode applies per client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexerAuth {
    None,
    Token(String),
    /// Credential sent under a caller chosen header, e.g. for hosted indexers that expect
    /// `X-API-Key`.
    Header {
        name: String,
        value: String,
    },
}

impl IndexerAuth {
    /// A non-empty header name wins over a bare token.
    pub fn from_flags(token: &str, header: &str) -> Self {
        if !header.is_empty() {
            IndexerAuth::Header {
                name: header.to_string(),
                value: token.to_string(),
            }
        } else if !token.is_empty() {
            IndexerAuth::Token(token.to_string())
        } else {
            IndexerAuth::None
        }
    }

    pub fn headers(&self) -> Result<HeaderMap, ConfigurationError> {
        let mut headers = HeaderMap::new();

        let (name, credential) = match self {
            IndexerAuth::None => return Ok(headers),
            IndexerAuth::Token(token) => (TOKEN_HEADER, token),
            IndexerAuth::Header { name, value } => (name.as_str(), value),
        };

        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
            ConfigurationError::InvalidHeaderName {
                name: name.to_string(),
                source,
            }
        })?;

        let mut value =
            HeaderValue::from_str(credential).map_err(ConfigurationError::InvalidHeaderValue)?;
        value.set_sensitive(true);
        headers.insert(header_name, value);

        Ok(headers)
    }
}

impl Display for IndexerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Token(token) => write!(f, "token {}", obfuscate(token)),
            Self::Header { name, value } => write!(f, "header {name} {}", obfuscate(value)),
        }
    }
}
