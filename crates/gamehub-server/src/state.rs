use std::sync::Arc;
use tokio::sync::RwLock;

use gamehub_core::Catalog;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Lifecycle of the catalog. Written once by the loader task.
#[derive(Debug, Clone)]
pub enum CatalogStatus {
    Loading,
    Ready(Arc<Catalog>),
    Failed(String),
}

impl CatalogStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

pub type SharedCatalog = Arc<RwLock<CatalogStatus>>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(CatalogStatus::Loading)),
            config: Arc::new(config),
        }
    }

    /// Current status. Cheap: a ready catalog is shared, not copied.
    pub async fn status(&self) -> CatalogStatus {
        self.catalog.read().await.clone()
    }

    pub async fn set_status(&self, status: CatalogStatus) {
        *self.catalog.write().await = status;
    }

    /// The loaded catalog, or the API error for the current status.
    pub async fn ready_catalog(&self) -> Result<Arc<Catalog>, AppError> {
        match self.status().await {
            CatalogStatus::Ready(catalog) => Ok(catalog),
            CatalogStatus::Loading => Err(AppError::Unavailable(
                "Catalog is still loading".to_string(),
            )),
            CatalogStatus::Failed(reason) => Err(AppError::Unavailable(format!(
                "Catalog failed to load: {reason}"
            ))),
        }
    }
}
