use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::catalog_service;

/// GET /api/artists/:id - filmography grouped by role, most frequent first
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, DomainError> {
    let detail = catalog_service::artist_detail(state.artist_repo.as_ref(), id).await?;
    Ok(Json(detail))
}
