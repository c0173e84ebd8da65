use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;

use gamehub_core::{Catalog, CatalogError, CategoryStrategy};

use crate::config::{CatalogSource, ServerConfig};
use crate::state::{AppState, CatalogStatus};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read the configured catalog source once. No retries.
pub async fn load_catalog(config: &ServerConfig) -> Result<Catalog, LoadError> {
    let strategy = config.categories.strategy();
    let timeout = Duration::from_secs(config.catalog.fetch_timeout_secs);

    match config.catalog.source() {
        CatalogSource::Embedded => Ok(Catalog::embedded(&strategy)?),
        CatalogSource::File(path) => {
            let bytes = tokio::fs::read(&path).await.map_err(|source| LoadError::Read {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Catalog::from_slice(&bytes, &strategy)?)
        },
        CatalogSource::Url(url) => fetch_catalog(&url, timeout, &strategy).await,
    }
}

async fn fetch_catalog(
    url: &str,
    timeout: Duration,
    strategy: &CategoryStrategy,
) -> Result<Catalog, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("gamehub-server/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;

    let resp = client.get(url).send().await.map_err(fetch_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = resp.bytes().await.map_err(fetch_err)?;
    Ok(Catalog::from_slice(&bytes, strategy)?)
}

/// Load the catalog in the background and publish the outcome to `state`.
///
/// The server answers requests with a loading state until this completes.
pub fn spawn_catalog_loader(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let source = state.config.catalog.source();
        tracing::info!(?source, "Loading catalog");

        let status = match load_catalog(&state.config).await {
            Ok(catalog) => {
                tracing::info!(
                    games = catalog.len(),
                    categories = catalog.categories().len(),
                    "Catalog ready"
                );
                CatalogStatus::Ready(Arc::new(catalog))
            },
            Err(e) => {
                tracing::error!(error = %e, "Catalog failed to load");
                CatalogStatus::Failed(e.to_string())
            },
        };
        state.set_status(status).await;
    })
}
