//! Remote image store (live mode)
//!
//! Thin HTTP client delegating every operation to a remote gallery API,
//! JSON over HTTP. Single-attempt semantics throughout: no retries, no
//! backoff; a 404 maps to `AppError::NotFound` and any other failure to
//! `AppError::Network`.

use std::time::Duration;

use async_trait::async_trait;
use galleria_core::models::{CreateImage, Image, ImageFilters, UpdateImage};
use galleria_core::AppError;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};

use crate::ImageStore;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a non-success response into the matching error, reading the
    /// body for the failure message.
    async fn error_for(response: Response) -> AppError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if status == StatusCode::NOT_FOUND {
            AppError::NotFound(body)
        } else {
            AppError::Network(format!("Request failed with status {}: {}", status, body))
        }
    }

    async fn parse_image(response: Response) -> Result<Image, AppError> {
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response as JSON: {}", e)))
    }

    async fn parse_images(response: Response) -> Result<Vec<Image>, AppError> {
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response as JSON: {}", e)))
    }
}

fn send_error(err: reqwest::Error) -> AppError {
    AppError::Network(format!("Failed to send request: {}", err))
}

#[async_trait]
impl ImageStore for RemoteStore {
    async fn list(&self, filters: &ImageFilters) -> Result<Vec<Image>, AppError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = filters.category {
            query.push(("category", category.to_string()));
        }
        if let Some(search) = filters.search.as_deref() {
            if !search.trim().is_empty() {
                query.push(("search", search.to_string()));
            }
        }
        if !filters.tags.is_empty() {
            query.push(("tags", filters.tags.join(",")));
        }

        let response = self
            .client
            .get(self.build_url("/images"))
            .query(&query)
            .send()
            .await
            .map_err(send_error)?;

        Self::parse_images(response).await
    }

    async fn get(&self, id: &str) -> Result<Image, AppError> {
        let response = self
            .client
            .get(self.build_url(&format!("/images/{}", id)))
            .send()
            .await
            .map_err(send_error)?;

        Self::parse_image(response).await
    }

    async fn create(&self, input: CreateImage) -> Result<Image, AppError> {
        let input = input.validated()?;

        let file_part = Part::bytes(input.file.bytes.to_vec())
            .file_name(input.file.file_name.clone())
            .mime_str(&input.file.content_type)
            .map_err(|e| AppError::InvalidInput(format!("Invalid content type: {}", e)))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("title", input.title)
            .text("category", input.category.to_string());
        if let Some(description) = input.description {
            form = form.text("description", description);
        }
        for tag in input.tags {
            form = form.text("tags", tag);
        }

        let response = self
            .client
            .post(self.build_url("/images/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;

        Self::parse_image(response).await
    }

    async fn update(&self, id: &str, changes: UpdateImage) -> Result<Image, AppError> {
        let changes = changes.validated()?;

        let response = self
            .client
            .put(self.build_url(&format!("/images/{}", id)))
            .json(&changes)
            .send()
            .await
            .map_err(send_error)?;

        Self::parse_image(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.build_url(&format!("/images/{}", id)))
            .send()
            .await
            .map_err(send_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    async fn list_related(&self, id: &str) -> Result<Vec<Image>, AppError> {
        let response = self
            .client
            .get(self.build_url(&format!("/images/{}/related", id)))
            .send()
            .await
            .map_err(send_error)?;

        Self::parse_images(response).await
    }
}
