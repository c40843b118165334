//! Data models for the application
//!
//! This module contains the image domain structures used throughout the
//! application. Wire representations are camelCase to match the JSON
//! contract of the gallery API.

mod image;

// Re-export all models for convenient imports
pub use image::*;
