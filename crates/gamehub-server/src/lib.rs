pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod html;
pub mod loader;
pub mod pages;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use state::AppState;

pub use loader::spawn_catalog_loader;

const SITE_CSS: &str = include_str!("../assets/site.css");

/// Build the Axum router and application state from a config.
///
/// The catalog starts in the loading state; call [`spawn_catalog_loader`]
/// to populate it.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let web_root = config.web_root.clone();
    let request_timeout = Duration::from_secs(config.limits.request_timeout_secs);
    let state = AppState::new(config);

    let api_routes = Router::new()
        .route("/games", get(api::list_games))
        .route("/games/{id}", get(api::get_game))
        .route("/categories", get(api::list_categories));

    let app = Router::new()
        .route("/", get(pages::home))
        .route("/games", get(pages::games))
        .route("/play", get(pages::play))
        .route("/detail", get(pages::detail))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/assets/site.css", get(site_css))
        .nest("/api/v1", api_routes)
        .fallback_service(ServeDir::new(&web_root))
        .with_state(state.clone())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http());

    (app, state)
}

async fn site_css() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}
