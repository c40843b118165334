//! Galleria Core Library
//!
//! This crate provides the domain models, the filter/match engine, upload
//! validation, configuration, and error types that are shared across all
//! Galleria components.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod upload;

// Re-export commonly used types
pub use config::{Config, StoreMode};
pub use error::{AppError, LogLevel};
pub use filter::{filter_images, matches, related_images, RELATED_IMAGES_LIMIT};
pub use upload::{FileCandidate, FileSelection, RejectedFile, UploadPolicy, UploadValidationError};
