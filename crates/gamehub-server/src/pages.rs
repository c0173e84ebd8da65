use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use gamehub_core::card::render_card;
use gamehub_core::{Catalog, GameRecord, ListingQuery, PageController};

use crate::html;
use crate::state::{AppState, CatalogStatus};

pub type Page = (StatusCode, Html<String>);

/// `?id=` for the play and detail pages.
#[derive(Debug, Default, Deserialize)]
pub struct GameQuery {
    #[serde(default)]
    pub id: Option<String>,
}

fn page(state: &AppState, status: StatusCode, title: &str, body: &str) -> Page {
    (
        status,
        Html(html::layout(&state.config.site_name, title, body)),
    )
}

fn loading_page(state: &AppState) -> Page {
    page(state, StatusCode::SERVICE_UNAVAILABLE, "Loading", &html::loading())
}

/// Rendered 400 for a query string that does not deserialize, such as a
/// repeated parameter.
fn bad_query(state: &AppState, rejection: &QueryRejection) -> Page {
    tracing::debug!(error = %rejection, "rejected query string");
    let body = html::message("Error", "Invalid request parameters.", "/games", "Back to Games");
    page(state, StatusCode::BAD_REQUEST, "Error", &body)
}

/// GET /. Featured games and category shortcuts.
pub async fn home(State(state): State<AppState>) -> Page {
    let catalog = match state.status().await {
        CatalogStatus::Ready(catalog) => catalog,
        CatalogStatus::Loading => return loading_page(&state),
        CatalogStatus::Failed(_) => {
            let body = html::message(
                "Error",
                "Failed to load games. Please reload the page.",
                "/",
                "Reload",
            );
            return page(&state, StatusCode::SERVICE_UNAVAILABLE, "Error", &body);
        },
    };

    let featured: Vec<_> = {
        let mut rng = rand::rng();
        catalog
            .featured(state.config.listing.featured_count, &mut rng)
            .into_iter()
            .map(|game| render_card(game, catalog.categories()))
            .collect()
    };
    page(
        &state,
        StatusCode::OK,
        "",
        &html::home(&featured, catalog.categories()),
    )
}

/// GET /games. Filterable, paginated listing.
pub async fn games(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Page {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return bad_query(&state, &rejection),
    };
    let catalog = match state.status().await {
        CatalogStatus::Ready(catalog) => catalog,
        CatalogStatus::Loading => return loading_page(&state),
        CatalogStatus::Failed(reason) => {
            tracing::debug!(%reason, "listing requested after failed load");
            let body = format!(
                "<h1>All Games</h1>\n<div id=\"load-error\" class=\"load-error\">{}</div>\n",
                html::escape("Failed to load games. Please reload the page.")
            );
            return page(&state, StatusCode::SERVICE_UNAVAILABLE, "Games", &body);
        },
    };

    let controller = PageController::from_query(&catalog, &query, state.config.listing.page_size);
    let view = controller.render();
    tracing::debug!(
        category = view.state.category.as_str(),
        term = %view.state.search_term,
        page = view.state.page,
        matches = view.total_matches,
        "rendered listing"
    );
    page(&state, StatusCode::OK, "Games", &html::listing(&view))
}

/// Resolve `?id=` against the catalog, or the error page to show instead.
fn lookup<'a>(
    state: &AppState,
    catalog: &'a Catalog,
    query: &GameQuery,
) -> Result<&'a GameRecord, Page> {
    let Some(id) = query.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
        let body = html::message("Error", "No game ID specified.", "/games", "Back to Games");
        return Err(page(state, StatusCode::BAD_REQUEST, "Error", &body));
    };
    catalog.get(id).ok_or_else(|| {
        tracing::debug!(id, "game not found");
        let body = html::message("Game Not Found", "Game not found.", "/games", "Back to Games");
        page(state, StatusCode::NOT_FOUND, "Game Not Found", &body)
    })
}

fn game_load_failed(state: &AppState) -> Page {
    let body = html::message(
        "Error",
        "Failed to load game information.",
        "/",
        "Back to Home",
    );
    page(state, StatusCode::SERVICE_UNAVAILABLE, "Error", &body)
}

/// GET /play?id=. Embed the game in a sandboxed frame.
pub async fn play(
    State(state): State<AppState>,
    query: Result<Query<GameQuery>, QueryRejection>,
) -> Page {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return bad_query(&state, &rejection),
    };
    let catalog = match state.status().await {
        CatalogStatus::Ready(catalog) => catalog,
        CatalogStatus::Loading => return loading_page(&state),
        CatalogStatus::Failed(_) => return game_load_failed(&state),
    };
    match lookup(&state, &catalog, &query) {
        Ok(game) => page(
            &state,
            StatusCode::OK,
            &game.title,
            &html::play(game, catalog.categories()),
        ),
        Err(error_page) => error_page,
    }
}

/// GET /detail?id=. Full information for one game.
pub async fn detail(
    State(state): State<AppState>,
    query: Result<Query<GameQuery>, QueryRejection>,
) -> Page {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return bad_query(&state, &rejection),
    };
    let catalog = match state.status().await {
        CatalogStatus::Ready(catalog) => catalog,
        CatalogStatus::Loading => return loading_page(&state),
        CatalogStatus::Failed(_) => return game_load_failed(&state),
    };
    match lookup(&state, &catalog, &query) {
        Ok(game) => page(
            &state,
            StatusCode::OK,
            &game.title,
            &html::detail(game, catalog.categories()),
        ),
        Err(error_page) => error_page,
    }
}
