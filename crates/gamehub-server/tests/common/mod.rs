use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gamehub_server::config::{CatalogConfig, ServerConfig};
use gamehub_server::{build_app, spawn_catalog_loader};

static CATALOG_FILES: AtomicUsize = AtomicUsize::new(0);

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
    catalog_file: Option<PathBuf>,
}

impl TestServer {
    /// Start a test server on the embedded catalog.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    /// Start a test server whose catalog is `json`, written to a temp file.
    pub async fn with_catalog_json(json: &str) -> Self {
        let n = CATALOG_FILES.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "gamehub-it-{}-{n}.json",
            std::process::id()
        ));
        std::fs::write(&path, json).unwrap();
        let mut server = Self::with_source(path.to_str().unwrap()).await;
        server.catalog_file = Some(path);
        server
    }

    /// Start a test server with `n` generated games.
    pub async fn with_games(n: usize) -> Self {
        Self::with_catalog_json(&catalog_json(n)).await
    }

    /// Start a test server loading the catalog from `source`.
    pub async fn with_source(source: &str) -> Self {
        let config = ServerConfig {
            catalog: CatalogConfig {
                source: source.to_string(),
                fetch_timeout_secs: 2,
            },
            ..ServerConfig::default()
        };
        Self::from_config(config).await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, state) = build_app(config);
        // Tests want a settled catalog, so wait for the loader here
        spawn_catalog_loader(state).await.unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
            catalog_file: None,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }

    /// GET `path` and return the status code and body text.
    pub async fn get_text(&self, path: &str) -> (u16, String) {
        let resp = reqwest::get(self.url(path)).await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.text().await.unwrap())
    }

    /// GET `path` and return the status code and JSON body.
    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let resp = reqwest::get(self.url(path)).await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(path) = self.catalog_file.take() {
            std::fs::remove_file(path).ok();
        }
    }
}

/// A catalog of `n` games, ids 1..=n, categories cycling through the
/// default four.
pub fn catalog_json(n: usize) -> String {
    const ROTATION: [&str; 4] = ["action", "puzzle", "casual", "multiplayer"];
    let games: Vec<_> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("Game {i}"),
                "description": format!("Description of game {i}"),
                "image": format!("images/{i}.jpg"),
                "url": format!("https://games.example.com/{i}/"),
                "category": ROTATION[(i - 1) % 4],
            })
        })
        .collect();
    serde_json::to_string(&games).unwrap()
}
