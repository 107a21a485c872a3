use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::AppConfig;
use server::startup;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    let app = startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_event_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/events/count", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"count": 0}));

    let res = c.post(format!("{}/events/", app.base_url))
        .json(&json!({"author": "alice", "reason": "overslept"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;

    let res = c.get(format!("{}/events/?limit=1", app.base_url)).send().await?;
    let listed = res.json::<Value>().await?;
    assert_eq!(listed, json!([created]));

    let res = c.delete(format!("{}/events/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/events/", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_cors_allows_any_origin() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .get(format!("{}/health", app.base_url))
        .header("origin", "http://localhost:5173")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let allowed = res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok());
    assert_eq!(allowed, Some("http://localhost:5173"));
    Ok(())
}
