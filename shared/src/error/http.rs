//! HTTP status mapping for error codes

use http::StatusCode;

use super::ErrorCode;

impl ErrorCode {
    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // Not found
            ErrorCode::NotFound
            | ErrorCode::UserNotFound
            | ErrorCode::OrderNotFound
            | ErrorCode::PaymentMethodNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::CategoryNotFound
            | ErrorCode::BannerNotFound => StatusCode::NOT_FOUND,

            // Conflicts on unique keys or referenced rows
            ErrorCode::AlreadyExists
            | ErrorCode::EmailTaken
            | ErrorCode::CategoryNameExists
            | ErrorCode::ProductHasOrders => StatusCode::CONFLICT,

            // Authentication
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid => StatusCode::UNAUTHORIZED,

            // Permission
            ErrorCode::PermissionDenied | ErrorCode::AdminRequired => StatusCode::FORBIDDEN,

            // System
            ErrorCode::Unknown
            | ErrorCode::CheckoutFailed
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // Everything else is a caller mistake
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::EmailTaken.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::NotAuthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::MissingTransactionRef.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::CheckoutFailed.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::InternalError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
