//! Galleria API Library
//!
//! This crate provides the HTTP handlers, error rendering, and application
//! setup for the gallery server. The store implementation behind the
//! handlers is selected once in `setup` from configuration.

mod api_doc;

pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
