//! Payment method types

use serde::{Deserialize, Serialize};

/// How a payment method settles: `Manual` methods require the buyer to pay
/// out-of-band and supply a transaction reference; `Auto` methods settle
/// through a gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodType {
    Manual,
    Auto,
}

impl PaymentMethodType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::Manual => "manual",
            PaymentMethodType::Auto => "auto",
        }
    }

    /// Parse a type as stored in the payment_methods table. Unknown values
    /// fall back to the manual flow.
    pub fn from_db(s: &str) -> Self {
        match s {
            "auto" => PaymentMethodType::Auto,
            _ => PaymentMethodType::Manual,
        }
    }
}
