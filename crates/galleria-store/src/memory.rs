//! In-memory image store (mock mode)
//!
//! Serves a fixed collection with no real durability: `create` fabricates
//! and echoes a record without inserting it, `update` returns the merged
//! copy without storing it, and `delete` reports success without removing
//! anything. The backing collection is never written after construction,
//! so reads need no locking.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use galleria_core::filter::{filter_images, related_images};
use galleria_core::models::{CreateImage, Dimensions, Image, ImageFilters, UpdateImage};
use galleria_core::AppError;

use crate::seed::seed_images;
use crate::ImageStore;

// No processing pipeline exists, so fabricated records get the fixture
// dimensions and reuse the original location as the thumbnail.
const MOCK_WIDTH: u32 = 800;
const MOCK_HEIGHT: u32 = 600;

pub struct InMemoryStore {
    images: Vec<Image>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    /// Store over an arbitrary fixed collection. Ids for fabricated records
    /// are derived from the construction timestamp and strictly increasing,
    /// so they never collide with each other or reuse an existing id.
    pub fn new(images: Vec<Image>) -> Self {
        let next_id = Utc::now().timestamp_millis().unsigned_abs();
        Self {
            images,
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Store over the six-record fixture gallery.
    pub fn seeded() -> Self {
        Self::new(seed_images())
    }

    fn find(&self, id: &str) -> Result<&Image, AppError> {
        self.images
            .iter()
            .find(|image| image.id == id)
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))
    }
}

#[async_trait]
impl ImageStore for InMemoryStore {
    async fn list(&self, filters: &ImageFilters) -> Result<Vec<Image>, AppError> {
        Ok(filter_images(&self.images, filters)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Image, AppError> {
        self.find(id).cloned()
    }

    async fn create(&self, input: CreateImage) -> Result<Image, AppError> {
        let input = input.validated()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
        let url = format!("memory://images/{}/{}", id, input.file.file_name);

        Ok(Image {
            thumbnail_url: url.clone(),
            url,
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            tags: input.tags,
            uploaded_at: Utc::now(),
            size: input.file.bytes.len() as u64,
            dimensions: Dimensions {
                width: MOCK_WIDTH,
                height: MOCK_HEIGHT,
            },
            mime_type: input.file.content_type,
        })
    }

    async fn update(&self, id: &str, changes: UpdateImage) -> Result<Image, AppError> {
        let changes = changes.validated()?;
        let existing = self.find(id)?.clone();
        Ok(changes.apply_to(existing))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.find(id)?;
        Ok(())
    }

    async fn list_related(&self, id: &str) -> Result<Vec<Image>, AppError> {
        Ok(related_images(&self.images, id)
            .into_iter()
            .cloned()
            .collect())
    }
}
