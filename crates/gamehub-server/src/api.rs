use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Json;

use gamehub_core::{CategorySet, GameRecord, ListingQuery, ListingView, PageController};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/v1/games. Same filter/pagination as the listing page.
pub async fn list_games(
    State(state): State<AppState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<ListingView>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let catalog = state.ready_catalog().await?;
    let controller = PageController::from_query(&catalog, &query, state.config.listing.page_size);
    Ok(Json(controller.render()))
}

/// GET /api/v1/games/{id}. One normalized record.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameRecord>, AppError> {
    let catalog = state.ready_catalog().await?;
    catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Game {id} not found")))
}

/// GET /api/v1/categories. The resolved filter categories.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategorySet>, AppError> {
    let catalog = state.ready_catalog().await?;
    Ok(Json(catalog.categories().clone()))
}
