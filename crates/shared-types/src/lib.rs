//! Shared domain types for the ContratoJusto workspace
//!
//! This crate provides the document request record, the rendered document
//! and its line classification, and the subscription plan catalog used
//! across the monolith.

pub mod document;
pub mod lines;
pub mod plans;

pub use document::{DocumentKind, DocumentRequest, OwnerType, ValidationError};
pub use lines::{classify_line, ClassifiedLine, LineKind, RenderedDocument};
pub use plans::{find_plan, plans, BillingPeriod, Plan};
