use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{DomainError, MovieFilter, MovieFilterParams};
use crate::infrastructure::AppState;
use crate::services::catalog_service;
use crate::services::export::{self, ExportFormat};

/// Catalog listing parameters; `export` switches the response to a file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(flatten)]
    pub filter: MovieFilterParams,
    pub export: Option<String>,
}

/// GET /api/movies - filtered listing, or an export when `export` is set
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Response, DomainError> {
    let filter = MovieFilter::from_params(&params.filter);
    let movies = state.movie_repo.search(&filter).await?;

    let format = params.export.as_deref().and_then(ExportFormat::parse);
    let Some(format) = format else {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "movies": movies,
                "total": movies.len(),
                "filter": filter
            })),
        )
            .into_response());
    };

    let payload = export::export(&movies, format, &state.export_options)?;
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        payload.filename
    ))
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(payload.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload.bytes,
    )
        .into_response())
}

/// GET /api/movies/genres
pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, DomainError> {
    let genres = state.movie_repo.genres().await?;
    Ok(Json(json!({ "genres": genres })))
}

/// GET /api/movies/:id - movie with crew grouped by role
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, DomainError> {
    let detail = catalog_service::movie_detail(state.movie_repo.as_ref(), id).await?;
    Ok(Json(detail))
}
