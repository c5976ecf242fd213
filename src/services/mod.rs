//! Services Layer
//!
//! Business logic extracted from HTTP handlers. Services work against the
//! repository traits so they can be exercised without Axum.

pub mod catalog_service;
pub mod export;
pub mod profile_service;
pub mod purchase_service;

pub use export::{ExportFormat, ExportOptions, ExportPayload};
