//! Domain layer - Pure business abstractions
//!
//! Repository contracts, the catalog filter and the read
//! models returned by the repositories. No Axum here.

pub mod errors;
pub mod filter;
pub mod repositories;

pub use errors::DomainError;
pub use filter::{MovieFilter, MovieFilterParams, SortKey};
pub use repositories::*;
