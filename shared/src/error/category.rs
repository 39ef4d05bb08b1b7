//! Error category classification

use super::ErrorCode;

/// Error categories derived from code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    General,
    Auth,
    Permission,
    Account,
    Order,
    Payment,
    Catalog,
    System,
}

impl ErrorCategory {
    /// Classify a numeric code by its range
    pub const fn from_code(code: u16) -> Self {
        match code {
            0..1000 => ErrorCategory::General,
            1000..2000 => ErrorCategory::Auth,
            2000..3000 => ErrorCategory::Permission,
            3000..4000 => ErrorCategory::Account,
            4000..5000 => ErrorCategory::Order,
            5000..6000 => ErrorCategory::Payment,
            6000..7000 => ErrorCategory::Catalog,
            _ => ErrorCategory::System,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCategory::General => "general",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Permission => "permission",
            ErrorCategory::Account => "account",
            ErrorCategory::Order => "order",
            ErrorCategory::Payment => "payment",
            ErrorCategory::Catalog => "catalog",
            ErrorCategory::System => "system",
        }
    }
}

impl ErrorCode {
    /// Category of this error code
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
