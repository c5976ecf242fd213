//! SeaORM implementation of ArtistRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::movie_repository::role_names;
use crate::domain::{Artist, ArtistRepository, DomainError, FilmCredit};
use crate::models::artist::Entity as ArtistEntity;
use crate::models::{movie, movie_crew};

/// SeaORM-based implementation of ArtistRepository
pub struct SeaOrmArtistRepository {
    db: DatabaseConnection,
}

impl SeaOrmArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for SeaOrmArtistRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DomainError> {
        Ok(ArtistEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn filmography(&self, artist_id: i32) -> Result<Vec<FilmCredit>, DomainError> {
        let rows = movie_crew::Entity::find()
            .filter(movie_crew::Column::ArtistId.eq(artist_id))
            .order_by_asc(movie_crew::Column::Id)
            .find_also_related(movie::Entity)
            .all(&self.db)
            .await?;

        let role_ids: Vec<i32> = rows.iter().map(|(c, _)| c.role_id).collect();
        let role_names = role_names(&self.db, role_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(crew, movie)| {
                let movie = movie?;
                Some(FilmCredit {
                    crew_id: crew.id,
                    movie_id: movie.id,
                    title: movie.title,
                    release_year: movie.release_year,
                    role: role_names.get(&crew.role_id).cloned()?,
                    character_name: crew.character_name,
                })
            })
            .collect())
    }
}
