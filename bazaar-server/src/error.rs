//! Service-layer error bridge
//!
//! `ServiceError` lets storage functions mix infrastructure failures
//! (`sqlx::Error`) with domain errors (`AppError`) behind a single `?`;
//! conversion into `AppError` logs the infrastructure side and masks it as
//! `InternalError`.

use axum::response::{IntoResponse, Response};
use shared::error::{AppError, ErrorCode};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum ServiceError {
    /// Infrastructure failure (database, pool)
    Db(BoxError),
    /// Domain error that maps directly to an API response
    App(AppError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(Box::new(e))
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Db(e) => {
                tracing::error!(error = %e, "database error");
                AppError::new(ErrorCode::InternalError)
            }
            ServiceError::App(e) => e,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
