use std::net::SocketAddr;

use configs::StoreBackend;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use server::{build_app, serve};

struct TestApp {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn start_server(backend: StoreBackend) -> anyhow::Result<TestApp> {
    let app = build_app(backend);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async move { let _ = rx.await; };
        if let Err(e) = serve(listener, app, shutdown).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, shutdown: Some(tx) })
}

#[tokio::test]
async fn e2e_crud_over_tcp() -> anyhow::Result<()> {
    let app = start_server(StoreBackend::Mutex).await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/customers", app.base_url))
        .json(&json!({"id": "42", "nome": "Ana", "email": "ana@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.put(format!("{}/customers/42", app.base_url))
        .json(&json!({"nome": "Ana Maria", "email": "am@example.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"id": "42", "nome": "Ana Maria", "email": "am@example.com"}));

    let res = c.delete(format!("{}/customers/42", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/customers/42", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Customer not found");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_concurrent_creates_all_land() -> anyhow::Result<()> {
    for backend in [StoreBackend::Mutex, StoreBackend::Sharded] {
        let app = start_server(backend).await?;
        let c = reqwest::Client::new();
        let n = 64;

        let mut handles = Vec::new();
        for i in 0..n {
            let c = c.clone();
            let url = format!("{}/customers", app.base_url);
            handles.push(tokio::spawn(async move {
                c.post(url)
                    .json(&json!({"id": format!("c{i}"), "nome": format!("n{i}"), "email": "e"}))
                    .send()
                    .await
                    .map(|r| r.status())
            }));
        }
        for h in handles {
            assert_eq!(h.await??, HttpStatusCode::CREATED);
        }

        let list = c.get(format!("{}/customers", app.base_url)).send().await?.json::<Vec<Value>>().await?;
        assert_eq!(list.len(), n, "{backend:?}");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_bind_conflict_is_an_error() -> anyhow::Result<()> {
    let taken = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let port = taken.local_addr()?.port();
    let cfg = configs::AppConfig {
        server: configs::ServerConfig { host: "127.0.0.1".into(), port, worker_threads: None },
        store: configs::StoreConfig::default(),
    };
    let err = server::run_with_config(cfg).await.expect_err("port already in use");
    assert!(err.to_string().contains("cannot bind"));
    Ok(())
}
