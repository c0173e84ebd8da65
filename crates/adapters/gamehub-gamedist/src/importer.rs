use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use gamehub_core::GameRecord;

use crate::feed::{FeedItem, convert_items};

/// Feed URL with a `{page}` placeholder. 100 items per page.
pub const DEFAULT_FEED_URL: &str = "https://catalog.api.gamedistribution.com/api/v1.0/rss/All/?collection=All&categories=All&tags=All&subType=All&type=All&mobile=All&rewarded=all&amount=100&page={page}";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no games fetched from the feed")]
    Empty,

    #[error("failed to encode catalog: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Importer settings.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    pub feed_url: String,
    pub pages: u32,
    /// Pause between page requests.
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            pages: 3,
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Outcome of a single page request.
enum PageOutcome {
    Items(Vec<FeedItem>),
    /// Non-success status; no later pages are requested.
    Stop(u16),
    /// Transport or decode failure; the page is skipped.
    Skip(String),
}

pub struct Importer {
    config: ImporterConfig,
    client: reqwest::Client,
}

impl Importer {
    pub fn new(config: ImporterConfig) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gamehub-import/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(ImportError::Client)?;
        Ok(Self { config, client })
    }

    fn page_url(&self, page: u32) -> String {
        self.config.feed_url.replace("{page}", &page.to_string())
    }

    async fn fetch_page(&self, page: u32) -> PageOutcome {
        let resp = match self.client.get(self.page_url(page)).send().await {
            Ok(resp) => resp,
            Err(e) => return PageOutcome::Skip(e.to_string()),
        };
        let status = resp.status();
        if !status.is_success() {
            return PageOutcome::Stop(status.as_u16());
        }
        match resp.json::<Vec<FeedItem>>().await {
            Ok(items) => PageOutcome::Items(items),
            Err(e) => PageOutcome::Skip(e.to_string()),
        }
    }

    /// Fetch pages `1..=pages` in order.
    pub async fn fetch_items(&self) -> Vec<FeedItem> {
        let pages = self.config.pages;
        let mut all = Vec::new();
        for page in 1..=pages {
            tracing::info!(page, pages, "Fetching feed page");
            match self.fetch_page(page).await {
                PageOutcome::Items(items) => {
                    tracing::info!(page, count = items.len(), "Fetched feed page");
                    all.extend(items);
                },
                PageOutcome::Stop(status) => {
                    tracing::warn!(page, status, "Feed page failed, stopping");
                    break;
                },
                PageOutcome::Skip(error) => {
                    tracing::warn!(page, %error, "Feed page errored, skipping");
                    continue;
                },
            }
            if page < pages && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }
        all
    }

    /// Fetch and convert. Fails when nothing usable came back.
    pub async fn import(&self) -> Result<Vec<GameRecord>, ImportError> {
        let items = self.fetch_items().await;
        if items.is_empty() {
            return Err(ImportError::Empty);
        }
        let records = convert_items(&items);
        tracing::info!(
            converted = records.len(),
            fetched = items.len(),
            "Converted feed items"
        );
        if records.is_empty() {
            return Err(ImportError::Empty);
        }
        Ok(records)
    }
}

/// Write records as a pretty-printed JSON array.
pub fn write_catalog(path: &Path, records: &[GameRecord]) -> Result<(), ImportError> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|source| ImportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = records.len(), path = %path.display(), "Saved catalog");
    Ok(())
}
