use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::services::purchase_service::{self, PurchaseRequest};

/// POST /api/movies/:id/purchase - confirm and pay for a movie
pub async fn purchase_movie(
    State(state): State<AppState>,
    user: AuthUser,
    Path(movie_id): Path<i32>,
    Json(request): Json<PurchaseRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let sale = purchase_service::checkout(
        state.movie_repo.as_ref(),
        state.sale_repo.as_ref(),
        state.user_repo.as_ref(),
        &user,
        movie_id,
        request,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "sale": sale,
            "redirect": "/profile"
        })),
    ))
}
