use asatop::{indexer::IndexerAuth, Config};
use serde_json::json;

fn holder(address: &str, amount: u64) -> serde_json::Value {
    json!({
        "address": address,
        "amount": amount,
        "deleted": false,
        "is-frozen": false,
        "opted-in-at-round": 12
    })
}

#[tokio::test]
async fn test_run_prints_ranked_holders() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/assets/31566704/balances")
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_body(
            json!({
                "balances": [
                    holder("AAAA", 100),
                    holder("BBBB", 300),
                    holder("CCCC", 200),
                    holder("DDDD", 300),
                    holder("EEEE", 50),
                ],
                "current-round": 40000000
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let config = Config {
        indexer_url: server.url(),
        auth: IndexerAuth::from_flags("secret", "X-API-Key"),
        asset_id: 31566704,
        top: 2,
    };

    let mut out = Vec::new();
    asatop::run(&config, &mut out).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0. BBBB 300\n1. DDDD 300\n2. CCCC 200\n"
    );
}

#[tokio::test]
async fn test_run_lists_everyone_without_top() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/assets/1/balances")
        .with_status(200)
        .with_body(
            json!({
                "balances": [holder("AAAA", 1), holder("BBBB", 2), holder("CCCC", 3)],
                "current-round": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = Config {
        indexer_url: server.url(),
        auth: IndexerAuth::None,
        asset_id: 1,
        top: 0,
    };

    let mut out = Vec::new();
    asatop::run(&config, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0. CCCC 3\n1. BBBB 2\n2. AAAA 1\n"
    );
}

#[tokio::test]
async fn test_run_fails_without_output_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/assets/1/balances")
        .with_status(500)
        .with_body(r#"{"message":"failed to query"}"#)
        .create_async()
        .await;

    let config = Config {
        indexer_url: server.url(),
        auth: IndexerAuth::Token("secret".to_string()),
        asset_id: 1,
        top: 0,
    };

    let mut out = Vec::new();
    let error = asatop::run(&config, &mut out).await.unwrap_err();

    assert!(out.is_empty());
    assert!(format!("{error:#}").contains("failed to query"));
}
