//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::{DomainError, MovieFilter};

pub use crate::models::artist::Model as Artist;
pub use crate::models::movie::Model as Movie;
pub use crate::models::sale::Model as Sale;
pub use crate::models::user::Model as User;

/// One crew assignment seen from the movie side
#[derive(Debug, Clone, Serialize)]
pub struct CrewCredit {
    pub crew_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
    pub role: String,
    pub character_name: Option<String>,
}

/// One crew assignment seen from the artist side
#[derive(Debug, Clone, Serialize)]
pub struct FilmCredit {
    pub crew_id: i32,
    pub movie_id: i32,
    pub title: String,
    pub release_year: i32,
    pub role: String,
    pub character_name: Option<String>,
}

/// A sale joined with the purchased movie, for the profile history
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRecord {
    pub sale_id: i32,
    pub movie_id: i32,
    pub title: String,
    pub unit_price: i32,
    pub sale_date: String,
}

/// Input for registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Repository trait for the movie catalog
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Movies satisfying every constraint of the filter, in the requested order
    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, DomainError>;

    /// Find a single movie by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError>;

    /// Distinct genre labels, sorted
    async fn genres(&self) -> Result<Vec<String>, DomainError>;

    /// Crew of a movie in assignment order
    async fn crew(&self, movie_id: i32) -> Result<Vec<CrewCredit>, DomainError>;
}

/// Repository trait for Artist entity
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Find an artist by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DomainError>;

    /// Every crew assignment of the artist in assignment order
    async fn filmography(&self, artist_id: i32) -> Result<Vec<FilmCredit>, DomainError>;
}

/// Repository trait for Sale entity
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Whether the user already bought the movie
    async fn exists(&self, user_id: i32, movie_id: i32) -> Result<bool, DomainError>;

    /// Insert a sale. A second sale for the same (user, movie) pair fails
    /// with `DomainError::AlreadyPurchased`.
    async fn create(&self, user_id: i32, movie_id: i32, unit_price: i32)
    -> Result<Sale, DomainError>;

    /// Purchases of a user, most recent first
    async fn history(&self, user_id: i32) -> Result<Vec<PurchaseRecord>, DomainError>;
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a user; a taken username fails with `DomainError::Conflict`
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace the stored contact email
    async fn update_email(&self, id: i32, email: Option<String>) -> Result<User, DomainError>;
}
