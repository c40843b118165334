//! Galleria Store Library
//!
//! The single seam between consumers and persistence. `ImageStore` is a
//! capability trait with two implementations selected once at composition
//! time: [`InMemoryStore`] (mock mode, seeded fixture collection) and
//! [`RemoteStore`] (live mode, JSON over HTTP). No mode checks exist
//! outside that composition point.

pub mod batch;
pub mod memory;
pub mod remote;
pub mod seed;

use async_trait::async_trait;
use galleria_core::models::{CreateImage, Image, ImageFilters, UpdateImage};
use galleria_core::AppError;

/// Fetch/create/update/delete operations over image records.
///
/// All operations are single-attempt: no retries, no backoff. `get`,
/// `update`, and `delete` signal an unknown id as [`AppError::NotFound`].
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// The sub-sequence of records satisfying all active filter
    /// constraints, original collection order preserved.
    async fn list(&self, filters: &ImageFilters) -> Result<Vec<Image>, AppError>;

    async fn get(&self, id: &str) -> Result<Image, AppError>;

    async fn create(&self, input: CreateImage) -> Result<Image, AppError>;

    async fn update(&self, id: &str, changes: UpdateImage) -> Result<Image, AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Up to four other records sharing the target's category or a tag,
    /// collection order preserved.
    async fn list_related(&self, id: &str) -> Result<Vec<Image>, AppError>;
}

// Re-export commonly used types
pub use batch::upload_batch;
pub use memory::InMemoryStore;
pub use remote::RemoteStore;
pub use seed::seed_images;
