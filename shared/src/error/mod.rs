//! Unified error system for the marketplace
//!
//! - [`ErrorCode`]: numeric error codes grouped by domain
//! - [`ErrorCategory`]: classification of codes by numeric range
//! - [`AppError`]: rich error type carrying a code, message and details
//! - [`ApiResponse`]: the error envelope serialized to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
