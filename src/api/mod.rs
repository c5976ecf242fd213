pub mod artists;
pub mod auth;
pub mod error;
pub mod health;
pub mod movies;
pub mod profile;
pub mod purchase;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        // Catalog
        .route("/movies", get(movies::list_movies))
        .route("/movies/genres", get(movies::list_genres))
        .route("/movies/:id", get(movies::get_movie))
        .route("/movies/:id/purchase", post(purchase::purchase_movie))
        .route("/artists/:id", get(artists::get_artist))
        // Profile
        .route(
            "/profile",
            get(profile::get_profile).post(profile::update_profile),
        )
        .with_state(state)
}
