//! Application state
//!
//! Holds the composed `ImageStore` capability and the upload acceptance
//! policy. The store implementation is chosen once in `setup`; handlers
//! never see the mock/live distinction.

use std::sync::Arc;

use galleria_core::{Config, UploadPolicy};
use galleria_store::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub upload_policy: UploadPolicy,
}

impl AppState {
    pub fn new(config: &Config, store: Arc<dyn ImageStore>) -> Self {
        Self {
            store,
            upload_policy: config.upload_policy(),
        }
    }
}
