pub mod artist;
pub mod movie;
pub mod movie_crew;
pub mod role;
pub mod sale;
pub mod user;
