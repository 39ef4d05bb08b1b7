//! Shared types for the marketplace backend
//!
//! - `error`: unified error codes, `AppError` and the API error envelope
//! - `models`: domain enums used by both the API surface and the storage layer
//! - `util`: small time helpers

pub mod error;
pub mod models;
pub mod util;
