//! bazaar-server: digital goods marketplace backend
//!
//! Long-running HTTP service that:
//! - authenticates buyers and administrators (argon2 passwords, JWT sessions)
//! - serves the product catalog and storefront configuration
//! - runs the checkout flow (price snapshot + sales counter in one transaction)
//! - aggregates dashboard metrics for the admin console

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod payment;
pub mod settings;
pub mod state;
pub mod util;

pub use config::Config;
pub use state::AppState;
