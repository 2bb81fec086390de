//! Observability for the Sprout storefront.
//!
//! This crate provides:
//! - `RequestId` - Identifier correlating every log line of one request
//! - `StructuredLogger` - Structured logging with request context, emitted
//!   as `tracing` events

mod logging;
mod request;

pub use logging::*;
pub use request::RequestId;
