//! Domain enums shared between the API surface and the storage layer

pub mod order;
pub mod payment;
pub mod role;

pub use order::OrderStatus;
pub use payment::PaymentMethodType;
pub use role::Role;
