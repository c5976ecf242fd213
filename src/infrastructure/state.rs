//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ArtistRepository, MovieRepository, SaleRepository, UserRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::{
    SeaOrmArtistRepository, SeaOrmMovieRepository, SeaOrmSaleRepository, SeaOrmUserRepository,
};
use crate::services::ExportOptions;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub movie_repo: Arc<dyn MovieRepository>,
    pub artist_repo: Arc<dyn ArtistRepository>,
    pub sale_repo: Arc<dyn SaleRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub export_options: Arc<ExportOptions>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_config(db, &Config::default())
    }

    pub fn with_config(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            movie_repo: Arc::new(SeaOrmMovieRepository::new(db.clone())),
            artist_repo: Arc::new(SeaOrmArtistRepository::new(db.clone())),
            sale_repo: Arc::new(SeaOrmSaleRepository::new(db.clone())),
            user_repo: Arc::new(SeaOrmUserRepository::new(db)),
            export_options: Arc::new(ExportOptions {
                font_path: config.export_font_path.clone(),
            }),
        }
    }
}
