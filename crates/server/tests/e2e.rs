//! Full HTTP round trips over a bound socket.
//!
//! The in-memory case always runs. The Postgres case needs `DATABASE_URL`
//! and is skipped when `SKIP_DB_TESTS` is set.

use std::net::SocketAddr;

use configs::DatabaseConfig;
use serde_json::{json, Value};
use service::storage::Storage;
use tokio::net::TcpListener;

async fn spawn(storage: &Storage) -> anyhow::Result<SocketAddr> {
    let app = server::startup::build_app(storage);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

async fn customer_flow(addr: SocketAddr, email: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let base = format!("http://{addr}/api/customers");
    let body = json!({"name": "Alice", "email": email, "phone": "555", "address": "1 Main St"});

    let resp = client.post(&base).json(&body).send().await?;
    assert_eq!(resp.status(), 201);
    let saved: Value = resp.json().await?;
    assert_eq!(saved["message"], "Customer saved successfully!");
    let id = saved["data"]["id"].clone();

    let resp = client.post(&base).json(&body).send().await?;
    assert_eq!(resp.status(), 409);
    let err: Value = resp.json().await?;
    assert_eq!(err["message"], "Error saving customer");

    let list: Value = client.get(&base).send().await?.json().await?;
    let matching: Vec<&Value> = list
        .as_array()
        .map(|a| a.iter().filter(|c| c["email"] == email).collect())
        .unwrap_or_default();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], id);
    Ok(())
}

#[tokio::test]
async fn e2e_in_memory() -> anyhow::Result<()> {
    let storage = Storage::in_memory();
    let addr = spawn(&storage).await?;

    let health: Value = reqwest::get(format!("http://{addr}/health")).await?.json().await?;
    assert_eq!(health["status"], "ok");

    customer_flow(addr, "alice@example.com").await
}

#[tokio::test]
async fn e2e_postgres() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("SKIP_DB_TESTS set; skipping postgres e2e");
        return Ok(());
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping postgres e2e");
        return Ok(());
    };
    let cfg = DatabaseConfig { url, ..DatabaseConfig::default() };
    let storage = Storage::connect(&cfg).await?;
    let addr = spawn(&storage).await?;

    let email = format!("e2e-{}@example.com", uuid::Uuid::new_v4());
    customer_flow(addr, &email).await?;
    storage.close().await?;
    Ok(())
}
