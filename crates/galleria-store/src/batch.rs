//! Concurrent batch upload
//!
//! A batch is issued as independent concurrent create requests with no
//! ordering guarantee between them and no atomicity across the batch: one
//! file's failure does not block another's success, and nothing is rolled
//! back on partial failure.

use futures::future::join_all;
use galleria_core::models::{CreateImage, Image};
use galleria_core::AppError;

use crate::ImageStore;

/// Upload every input concurrently, collecting per-file results in input
/// order.
pub async fn upload_batch(
    store: &dyn ImageStore,
    inputs: Vec<CreateImage>,
) -> Vec<Result<Image, AppError>> {
    join_all(inputs.into_iter().map(|input| store.create(input))).await
}
