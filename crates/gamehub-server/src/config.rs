use std::path::PathBuf;

use serde::Deserialize;

use gamehub_core::category::{CategoryStrategy, CategoryTag, default_categories, selects_all};
use gamehub_core::controller::DEFAULT_PAGE_SIZE;

/// Top-level server configuration, loaded from `gamehub.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub web_root: String,
    pub site_name: String,
    pub catalog: CatalogConfig,
    pub listing: ListingConfig,
    pub categories: CategoriesConfig,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            web_root: "web".to_string(),
            site_name: "Game Hub".to_string(),
            catalog: CatalogConfig::default(),
            listing: ListingConfig::default(),
            categories: CategoriesConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// `embedded`, a filesystem path, or an `http(s)://` URL.
    pub source: String,
    pub fetch_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: "embedded".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

/// Parsed form of [`CatalogConfig::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Url(String),
}

impl CatalogConfig {
    pub fn source(&self) -> CatalogSource {
        let source = self.source.trim();
        if source.is_empty() || source.eq_ignore_ascii_case("embedded") {
            CatalogSource::Embedded
        } else if source.starts_with("http://") || source.starts_with("https://") {
            CatalogSource::Url(source.to_string())
        } else {
            CatalogSource::File(PathBuf::from(source))
        }
    }
}

/// Listing page settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
    /// Games shown on the home page.
    pub featured_count: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            featured_count: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Static,
    Derived,
}

/// Filter button configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    pub strategy: StrategyKind,
    /// Used when `strategy = "static"`.
    pub list: Vec<CategoryTag>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Static,
            list: default_categories(),
        }
    }
}

impl CategoriesConfig {
    pub fn strategy(&self) -> CategoryStrategy {
        match self.strategy {
            StrategyKind::Static => CategoryStrategy::Static(self.list.clone()),
            StrategyKind::Derived => CategoryStrategy::Derived,
        }
    }
}

/// Infrastructure limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// First problem found in the configuration, if any.
    pub fn check(&self) -> Result<(), String> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "listen_addr `{}` is not a valid socket address",
                self.listen_addr
            ));
        }
        if self.listing.page_size == 0 {
            return Err("listing.page_size must be > 0".to_string());
        }
        if self.catalog.fetch_timeout_secs == 0 {
            return Err("catalog.fetch_timeout_secs must be > 0".to_string());
        }
        if self.limits.request_timeout_secs == 0 {
            return Err("limits.request_timeout_secs must be > 0".to_string());
        }
        if self.categories.strategy == StrategyKind::Static && self.categories.list.is_empty() {
            return Err("categories.list must not be empty with the static strategy".to_string());
        }
        if let Some(tag) = self.categories.list.iter().find(|t| selects_all(&t.id)) {
            return Err(format!(
                "categories.list id `{}` is reserved for showing every category",
                tag.id
            ));
        }
        Ok(())
    }

    /// Validate configuration, logging warnings for issues and exiting on
    /// errors.
    pub fn validate(&self) {
        if let Err(problem) = self.check() {
            tracing::error!("{problem}");
            std::process::exit(1);
        }

        if self.listing.featured_count == 0 {
            tracing::warn!("listing.featured_count is 0, the home page will show no games");
        }
        if let CatalogSource::File(path) = self.catalog.source()
            && !path.exists()
        {
            tracing::warn!(path = %path.display(), "catalog file does not exist yet");
        }
    }

    /// Load config from `gamehub.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("gamehub.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from gamehub.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse gamehub.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No gamehub.toml found, using defaults");
                ServerConfig::default()
            },
        };

        if let Ok(addr) = std::env::var("GAMEHUB_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("GAMEHUB_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }
        if let Ok(source) = std::env::var("GAMEHUB_CATALOG")
            && !source.is_empty()
        {
            config.catalog.source = source;
        }
        if let Ok(val) = std::env::var("GAMEHUB_PAGE_SIZE")
            && let Ok(n) = val.parse::<usize>()
        {
            config.listing.page_size = n;
        }
        if let Ok(val) = std::env::var("GAMEHUB_CATEGORY_STRATEGY") {
            match val.as_str() {
                "static" => config.categories.strategy = StrategyKind::Static,
                "derived" => config.categories.strategy = StrategyKind::Derived,
                other => tracing::warn!("Ignoring unknown GAMEHUB_CATEGORY_STRATEGY `{other}`"),
            }
        }

        config
    }
}
