use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::performance::TimedExt;

use super::{BalanceRecord, ConfigurationError, FetchError, IndexerAuth};

#[derive(Debug, Deserialize)]
struct AssetBalancesEnvelope {
    balances: Vec<BalanceRecord>,
    #[serde(rename = "current-round")]
    current_round: Option<u64>,
}

fn make_asset_balances_url(base_url: &str, asset_id: u64) -> String {
    format!("{base_url}/v2/assets/{asset_id}/balances")
}

#[automock]
#[async_trait]
pub trait BalanceSource {
    /// All holders of the asset, in the order the source reports them.
    async fn lookup_asset_balances(&self, asset_id: u64) -> Result<Vec<BalanceRecord>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct IndexerHttp {
    /// Without a trailing slash.
    base_url: String,
    client: reqwest::Client,
}

impl IndexerHttp {
    pub fn new(indexer_url: &str, auth: &IndexerAuth) -> Result<Self, ConfigurationError> {
        let url = Url::parse(indexer_url).map_err(|source| ConfigurationError::InvalidUrl {
            url: indexer_url.to_string(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigurationError::UrlCannotBeABase(
                indexer_url.to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .default_headers(auth.headers()?)
            .build()
            .map_err(ConfigurationError::Client)?;

        debug!(indexer_url, %auth, "created indexer client");

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl BalanceSource for IndexerHttp {
    async fn lookup_asset_balances(&self, asset_id: u64) -> Result<Vec<BalanceRecord>, FetchError> {
        let url = make_asset_balances_url(&self.base_url, asset_id);

        let res = self
            .client
            .get(&url)
            .send()
            .timed("lookup_asset_balances")
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(%url, %status, error = %e, "failed to read indexer error body");
                    String::new()
                }
            };
            return Err(FetchError::Status {
                status,
                url,
                body: body.trim().to_string(),
            });
        }

        let envelope = res
            .json::<AssetBalancesEnvelope>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        debug!(
            asset_id,
            current_round = ?envelope.current_round,
            holders = envelope.balances.len(),
            "fetched asset balances"
        );

        Ok(envelope.balances)
    }
}
