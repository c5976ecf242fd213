//! Purchase Service - turns a confirmed checkout into a sale
//!
//! Each step is its own function; `checkout` composes them in order:
//! movie lookup and duplicate check, confirmation, email validation, sale,
//! then the email write. Nothing is written unless the sale is recorded.

use serde::Deserialize;

use crate::domain::{DomainError, Movie, MovieRepository, Sale, SaleRepository, UserRepository};
use crate::infrastructure::auth::AuthUser;
use crate::services::profile_service;

/// Checkout form
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub confirm: bool,
}

/// Resolves the movie and rejects a repeat purchase before anything changes.
pub async fn ensure_purchasable(
    movies: &dyn MovieRepository,
    sales: &dyn SaleRepository,
    user: &AuthUser,
    movie_id: i32,
) -> Result<Movie, DomainError> {
    let movie = movies
        .find_by_id(movie_id)
        .await?
        .ok_or(DomainError::NotFound)?;

    if sales.exists(user.id, movie.id).await? {
        tracing::warn!(user = %user.username, movie_id, "Repeat purchase refused");
        return Err(DomainError::AlreadyPurchased);
    }

    Ok(movie)
}

pub fn require_confirmation(confirm: bool) -> Result<(), DomainError> {
    if confirm {
        Ok(())
    } else {
        Err(DomainError::Validation(
            "Purchase must be confirmed".to_string(),
        ))
    }
}

/// Records the sale at the movie's price as of now.
pub async fn record_sale(
    sales: &dyn SaleRepository,
    user: &AuthUser,
    movie: &Movie,
) -> Result<Sale, DomainError> {
    let sale = sales.create(user.id, movie.id, movie.price).await?;

    tracing::info!(
        user = %user.username,
        movie_id = movie.id,
        unit_price = sale.unit_price,
        "Sale recorded"
    );
    Ok(sale)
}

pub async fn checkout(
    movies: &dyn MovieRepository,
    sales: &dyn SaleRepository,
    users: &dyn UserRepository,
    user: &AuthUser,
    movie_id: i32,
    request: PurchaseRequest,
) -> Result<Sale, DomainError> {
    let movie = ensure_purchasable(movies, sales, user, movie_id).await?;
    require_confirmation(request.confirm)?;
    let pending = profile_service::pending_email(users, user, &request.email).await?;
    let sale = record_sale(sales, user, &movie).await?;

    // The sale stands even if the contact update fails
    if let Err(e) = profile_service::sync_email(users, user, pending).await {
        tracing::error!(user = %user.username, "Email update after sale failed: {}", e);
    }

    Ok(sale)
}
