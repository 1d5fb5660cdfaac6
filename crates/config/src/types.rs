//! Configuration types for the Cart PayFlow integration.

mod cart;
mod integration;
mod payment;
mod value;

pub use cart::CartConfig;
pub use integration::IntegrationConfig;
pub use payment::PaymentConfig;
pub use value::{Value, ValueKind};
