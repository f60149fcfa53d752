//! Server-side client for the payment provider's order API
//!
//! Card data never transits this codebase: the only card instrument the
//! client accepts is a provider-issued token captured by the provider's
//! hosted tokenization widget. PIX orders carry a one-hour expiry and
//! return a redeemable code plus a QR display URL.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GatewayConfig, PagarmeClient};
pub use error::PaymentError;
pub use types::{
    split_phone, Charge, CreateOrderRequest, Customer, CustomerType, DocumentType,
    LastTransaction, MobilePhone, OrderItem, OrderResponse, PaymentInstrument, Phones,
};
