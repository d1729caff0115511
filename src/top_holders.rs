use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    config::Config,
    indexer::{BalanceSource, IndexerHttp},
    ranking,
};

/// Fetches the holders of `asset_id` from `source` and writes the ranked report to `out`. Nothing
/// is written when the fetch fails.
pub async fn report_top_holders<S: BalanceSource>(
    source: &S,
    asset_id: u64,
    top: i64,
    out: &mut impl Write,
) -> Result<()> {
    let balances = source
        .lookup_asset_balances(asset_id)
        .await
        .context("failed to get balances")?;

    debug!(asset_id, holders = balances.len(), "ranking asset holders");

    let ranked = ranking::rank(balances, top);
    ranking::write_report(&ranked, out).context("failed to write balances")?;

    info!(asset_id, listed = ranked.len(), "listed asset holders");

    Ok(())
}

pub async fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let indexer = IndexerHttp::new(&config.indexer_url, &config.auth)
        .context("failed to make indexer client")?;

    report_top_holders(&indexer, config.asset_id, config.top, out).await
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::indexer::{BalanceRecord, FetchError, IndexerAuth, MockBalanceSource};

    use super::*;

    #[tokio::test]
    async fn reports_ranked_holders() {
        let mut source = MockBalanceSource::new();
        source
            .expect_lookup_asset_balances()
            .with(eq(7))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    BalanceRecord::new("A", 1),
                    BalanceRecord::new("B", 3),
                    BalanceRecord::new("C", 2),
                    BalanceRecord::new("D", 3),
                ])
            });

        let mut out = Vec::new();
        report_top_holders(&source, 7, 1, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0. B 3\n1. D 3\n");
    }

    #[tokio::test]
    async fn reports_nothing_for_an_asset_without_holders() {
        let mut source = MockBalanceSource::new();
        source
            .expect_lookup_asset_balances()
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut out = Vec::new();
        report_top_holders(&source, 7, 0, &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_writes_nothing() {
        let mut source = MockBalanceSource::new();
        source
            .expect_lookup_asset_balances()
            .times(1)
            .returning(|_| {
                Err(FetchError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: "http://localhost:8980/v2/assets/7/balances".to_string(),
                    body: "boom".to_string(),
                })
            });

        let mut out = Vec::new();
        let error = report_top_holders(&source, 7, 0, &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        assert_eq!(error.to_string(), "failed to get balances");
        assert!(error.root_cause().to_string().contains("boom"));
    }

    #[tokio::test]
    async fn invalid_url_fails_before_fetching() {
        let config = Config {
            indexer_url: "not a url".to_string(),
            auth: IndexerAuth::None,
            asset_id: 7,
            top: 0,
        };

        let mut out = Vec::new();
        let error = run(&config, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert_eq!(error.to_string(), "failed to make indexer client");
    }
}
