//! Payment gateway boundary
//!
//! The storefront only records payment evidence; nothing here talks to a real
//! processor. The trait keeps the seam so a gateway integration can slot in
//! next to the manual flow.

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::PaymentMethodType;

/// A charge attempt resolves to the transaction reference recorded on the
/// order.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: f64, supplied_ref: Option<&str>) -> Result<String, AppError>;
}

/// Manual flow: the buyer pays out-of-band and supplies the reference.
pub struct ManualPayment;

#[async_trait]
impl PaymentGateway for ManualPayment {
    async fn charge(&self, _amount: f64, supplied_ref: Option<&str>) -> Result<String, AppError> {
        match supplied_ref.map(str::trim) {
            Some(r) if !r.is_empty() => Ok(r.to_string()),
            _ => Err(AppError::new(ErrorCode::MissingTransactionRef)),
        }
    }
}

/// Stub for gateway-settled methods: fabricates a reference server-side.
pub struct AutoPaymentStub;

#[async_trait]
impl PaymentGateway for AutoPaymentStub {
    async fn charge(&self, _amount: f64, _supplied_ref: Option<&str>) -> Result<String, AppError> {
        Ok(format!("auto-{}", uuid::Uuid::new_v4()))
    }
}

/// Select the gateway for a payment method type.
pub fn gateway_for(method_type: PaymentMethodType) -> Box<dyn PaymentGateway> {
    match method_type {
        PaymentMethodType::Manual => Box::new(ManualPayment),
        PaymentMethodType::Auto => Box::new(AutoPaymentStub),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_requires_reference() {
        let err = ManualPayment.charge(49.0, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingTransactionRef);

        let err = ManualPayment.charge(49.0, Some("   ")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingTransactionRef);
    }

    #[tokio::test]
    async fn test_manual_trims_reference() {
        let txn = ManualPayment.charge(49.0, Some("  TXN-1 ")).await.unwrap();
        assert_eq!(txn, "TXN-1");
    }

    #[tokio::test]
    async fn test_auto_fabricates_reference() {
        let a = AutoPaymentStub.charge(49.0, None).await.unwrap();
        let b = AutoPaymentStub.charge(49.0, None).await.unwrap();
        assert!(a.starts_with("auto-"));
        assert_ne!(a, b);
    }
}
