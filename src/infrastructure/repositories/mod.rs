//! Repository implementations using SeaORM

pub mod artist_repository;
pub mod movie_repository;
pub mod sale_repository;
pub mod user_repository;

pub use artist_repository::SeaOrmArtistRepository;
pub use movie_repository::SeaOrmMovieRepository;
pub use sale_repository::SeaOrmSaleRepository;
pub use user_repository::SeaOrmUserRepository;
