//! Application error type and API envelope

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::{ErrorCategory, ErrorCode};

/// Application error with code, message and optional details
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            details: None,
        }
    }

    /// Create an error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details
    pub fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        let details = self
            .details
            .get_or_insert_with(|| serde_json::Value::Object(Default::default()));
        if let serde_json::Value::Object(map) = details {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    /// Validation error with a field-level message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

/// Unified API error envelope: `{code, message, details?}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: ErrorCode::Success.message().to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // System-category failures are logged server-side; clients only see
        // the generic message.
        if self.category() == ErrorCategory::System {
            tracing::error!(code = self.code.code(), "{}", self.message);
        }
        let status = self.code.http_status();
        (status, Json(ApiResponse::error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "price must be positive");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", 42);
        let details = err.details.unwrap();
        assert_eq!(details["order_id"], 42);
    }

    #[test]
    fn test_error_envelope_serialization() {
        let err = AppError::new(ErrorCode::EmailTaken);
        let envelope = ApiResponse::error(&err);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 3001);
        assert_eq!(json["message"], "Email already registered");
        assert!(json.get("data").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_ok_envelope() {
        let envelope = ApiResponse::ok(serde_json::json!({"id": 1}));
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.data.unwrap()["id"], 1);
    }
}
