//! CRUD round-trips over HTTP.

use serde_json::{json, Value};
use tariff_sync::{Tariff, TariffInput};

use crate::support::{start_default, API_KEY};

#[tokio::test]
async fn create_get_update_delete() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(format!("{base}/tariffs"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({
            "id": 999,
            "name": "Basic",
            "features": ["Fast"],
            "prices": { "monthly": 19.99 }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Tariff = resp.json().await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Basic");
    assert_eq!(created.remote_id, None);

    // Read
    let resp = client
        .get(format!("{base}/tariffs/1"))
        .header("X-API-KEY", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Tariff = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    // Update
    let resp = client
        .put(format!("{base}/tariffs/1"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({
            "name": "Premium",
            "features": ["Faster", "Secure"],
            "prices": { "monthly": 29.99, "yearly": 299.0 },
            "remoteId": 5005
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Tariff = resp.json().await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Premium");
    assert_eq!(updated.remote_id, Some(5005));
    assert_eq!(store.get(1).unwrap().unwrap(), updated);

    // Delete
    let resp = client
        .delete(format!("{base}/tariffs/1"))
        .header("X-API-KEY", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let removed: Tariff = resp.json().await.unwrap();
    assert_eq!(removed, updated);

    let resp = client
        .get(format!("{base}/tariffs/1"))
        .header("X-API-KEY", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn missing_ids_return_404() {
    let (base, _store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/tariffs/42"))
        .header("X-API-KEY", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("42"));

    let resp = client
        .put(format!("{base}/tariffs/42"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({ "name": "ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/tariffs/42"))
        .header("X-API-KEY", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let (base, store) = start_default().await;
    store.create(TariffInput::named("first")).unwrap();
    store.delete(1).unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tariffs"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({ "name": "second" }))
        .send()
        .await
        .unwrap();
    let created: Tariff = resp.json().await.unwrap();
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn taken_remote_id_returns_409() {
    let (base, store) = start_default().await;
    store
        .create(TariffInput::named("synced").with_remote_id(5010))
        .unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tariffs"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({ "name": "copy", "remoteId": 5010 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn body_without_name_is_rejected() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tariffs"))
        .header("X-API-KEY", API_KEY)
        .json(&json!({ "features": ["Fast"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn list_all_returns_every_tariff() {
    let (base, store) = start_default().await;
    store.create(TariffInput::named("a")).unwrap();
    store
        .create(TariffInput::named("b").with_remote_id(5001))
        .unwrap();

    let resp = reqwest::get(format!("{base}/dummy-list-all-tariffs"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let all: Vec<Tariff> = resp.json().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].remote_id, Some(5001));
}
