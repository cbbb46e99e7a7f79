//! API key gate.

use serde_json::{json, Value};
use tariff_sync::{Tariff, TariffStore};

use crate::support::{start_default, start_server, API_KEY};

#[tokio::test]
async fn missing_key_returns_401() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tariffs"))
        .json(&json!({ "name": "sneaky" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.text().await.unwrap(), "Invalid or missing API key");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn wrong_key_returns_401() {
    let (base, _store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/tariffs/1"))
        .header("X-API-KEY", "not-the-key")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn header_name_is_case_insensitive() {
    let (base, _store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/tariffs/1"))
        .header("x-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn no_configured_key_rejects_everything_protected() {
    let base = start_server(TariffStore::new(), None).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/tariffs/1"))
        .header("X-API-KEY", "")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = client
        .get(format!("{base}/dummy-list-all-tariffs"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn public_endpoints_need_no_key() {
    let (base, _store) = start_default().await;

    let resp = reqwest::get(format!("{base}/dummy-remote-tariffs"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let remote: Vec<Tariff> = resp.json().await.unwrap();
    assert_eq!(remote.len(), 20);

    let resp = reqwest::get(format!("{base}/v3/api-docs")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let doc: Value = resp.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "WiFi API");

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
}
