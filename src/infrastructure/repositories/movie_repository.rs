//! SeaORM implementation of MovieRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::domain::{CrewCredit, DomainError, Movie, MovieFilter, MovieRepository, SortKey};
use crate::models::movie::{Column, Entity as MovieEntity};
use crate::models::{artist, movie_crew, role};

/// SeaORM-based implementation of MovieRepository
pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, DomainError> {
        tracing::debug!(?filter, "Catalog query");

        // Ranges are inclusive on both bounds
        let mut condition = Condition::all();

        if let Some(min) = filter.min_year {
            condition = condition.add(Column::ReleaseYear.gte(min));
        }
        if let Some(max) = filter.max_year {
            condition = condition.add(Column::ReleaseYear.lte(max));
        }
        if let Some(min) = filter.min_price {
            condition = condition.add(Column::Price.gte(min));
        }
        if let Some(max) = filter.max_price {
            condition = condition.add(Column::Price.lte(max));
        }

        let query = MovieEntity::find().filter(condition);
        let query = match filter.sort_by {
            Some(SortKey::Title) => query.order_by_asc(Column::Title),
            Some(SortKey::YearDesc) => query.order_by_desc(Column::ReleaseYear),
            Some(SortKey::YearAsc) => query.order_by_asc(Column::ReleaseYear),
            Some(SortKey::PriceDesc) => query.order_by_desc(Column::Price),
            Some(SortKey::PriceAsc) => query.order_by_asc(Column::Price),
            None => query.order_by_asc(Column::Id),
        };

        let movies = query.all(&self.db).await?;
        let fetched = movies.len();

        // In-memory text filters: SQLite LIKE only folds ASCII case
        let movies: Vec<Movie> = movies
            .into_iter()
            .filter(|m| filter.matches_text(&m.title, &m.description, &m.genre))
            .collect();

        tracing::debug!(fetched, returned = movies.len(), "Catalog query done");
        Ok(movies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        Ok(MovieEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn genres(&self) -> Result<Vec<String>, DomainError> {
        let genres: Vec<String> = MovieEntity::find()
            .select_only()
            .column(Column::Genre)
            .distinct()
            .order_by_asc(Column::Genre)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(genres.into_iter().filter(|g| !g.trim().is_empty()).collect())
    }

    async fn crew(&self, movie_id: i32) -> Result<Vec<CrewCredit>, DomainError> {
        let rows = movie_crew::Entity::find()
            .filter(movie_crew::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_crew::Column::Id)
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?;

        let role_ids: Vec<i32> = rows.iter().map(|(c, _)| c.role_id).collect();
        let role_names = role_names(&self.db, role_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(crew, artist)| {
                let artist = artist?;
                Some(CrewCredit {
                    crew_id: crew.id,
                    artist_id: artist.id,
                    artist_name: artist.full_name(),
                    role: role_names.get(&crew.role_id).cloned()?,
                    character_name: crew.character_name,
                })
            })
            .collect())
    }
}

/// Role id -> role name for the given ids
pub(crate) async fn role_names(
    db: &DatabaseConnection,
    role_ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DomainError> {
    if role_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let roles = role::Entity::find()
        .filter(role::Column::Id.is_in(role_ids))
        .all(db)
        .await?;

    Ok(roles.into_iter().map(|r| (r.id, r.name)).collect())
}
