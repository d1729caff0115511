//! Client side of the indexer's asset balances API.
mod auth;
mod error;
mod http;

use serde::Deserialize;

pub use auth::IndexerAuth;
pub use auth::TOKEN_HEADER;
pub use error::ConfigurationError;
pub use error::FetchError;
pub use http::BalanceSource;
pub use http::IndexerHttp;
pub use http::MockBalanceSource;

/// One holder of an asset and how much of it they hold.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BalanceRecord {
    #[serde(rename = "address")]
    pub account: String,
    pub amount: u64,
}

impl BalanceRecord {
    pub fn new(account: impl Into<String>, amount: u64) -> Self {
        Self {
            account: account.into(),
            amount,
        }
    }
}
