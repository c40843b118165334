//! Image gallery handlers
//!
//! The CRUD surface over the composed `ImageStore`: list with filters,
//! single-record fetch, multipart upload, partial metadata update, delete,
//! and related-image lookup.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use galleria_core::models::{Category, CreateImage, FilePayload, Image, ImageFilters, UpdateImage};
use galleria_core::{AppError, FileCandidate};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListImagesQuery {
    /// Category constraint; `all`, empty, or absent means unconstrained
    pub category: Option<String>,
    /// Free-text search over title, description, and tags
    pub search: Option<String>,
    /// Comma-separated tag set; any intersecting tag matches
    pub tags: Option<String>,
}

impl ListImagesQuery {
    fn into_filters(self) -> Result<ImageFilters, AppError> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) if value.eq_ignore_ascii_case("all") => None,
            Some(value) => Some(value.parse::<Category>().map_err(|_| {
                AppError::InvalidInput(format!("Invalid category: {}", value))
            })?),
        };

        let tags = self
            .tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(|tag| tag.trim().to_lowercase())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(ImageFilters {
            category,
            tags,
            search: self.search,
        })
    }
}

#[utoipa::path(
    get,
    path = "/images",
    tag = "images",
    params(ListImagesQuery),
    responses(
        (status = 200, description = "Matching images in collection order", body = Vec<Image>),
        (status = 400, description = "Invalid filter", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query), fields(operation = "list_images"))]
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ListImagesQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let filters = query.into_filters()?;
    let images = state.store.list(&filters).await?;
    Ok(Json(images))
}

#[utoipa::path(
    get,
    path = "/images/{id}",
    tag = "images",
    params(("id" = String, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image found", body = Image),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(image_id = %id, operation = "get_image"))]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let image = state.store.get(&id).await?;
    Ok(Json(image))
}

#[utoipa::path(
    post,
    path = "/images/upload",
    tag = "images",
    responses(
        (status = 201, description = "Image uploaded", body = Image),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut file: Option<FilePayload> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut category: Option<Category> = None;
    let mut tags: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::InvalidInput("File name is missing".to_string()))?;
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let bytes: Bytes = field.bytes().await?;
                file = Some(FilePayload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("title") => title = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("category") => {
                let value = field.text().await?;
                category = Some(value.parse::<Category>().map_err(|_| {
                    AppError::InvalidInput(format!("Invalid category: {}", value))
                })?);
            }
            Some("tags") => tags.push(field.text().await?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::InvalidInput("Missing file field".to_string()))?;
    let title = title.ok_or_else(|| AppError::InvalidInput("Missing title field".to_string()))?;
    let category =
        category.ok_or_else(|| AppError::InvalidInput("Missing category field".to_string()))?;

    // Acceptance policy gate: declared type and size only, no content inspection
    let candidate = FileCandidate {
        name: file.file_name.clone(),
        size: file.bytes.len(),
        content_type: file.content_type.clone(),
    };
    state.upload_policy.check(&candidate)?;

    let created = state
        .store
        .create(CreateImage {
            title,
            description,
            category,
            tags,
            file,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/images/{id}",
    tag = "images",
    params(("id" = String, Path, description = "Image ID")),
    request_body = UpdateImage,
    responses(
        (status = 200, description = "Updated image", body = Image),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, changes), fields(image_id = %id, operation = "update_image"))]
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateImage>,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state.store.update(&id, changes).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/images/{id}",
    tag = "images",
    params(("id" = String, Path, description = "Image ID")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(image_id = %id, operation = "delete_image"))]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/images/{id}/related",
    tag = "images",
    params(("id" = String, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Up to four related images", body = Vec<Image>)
    )
)]
#[tracing::instrument(skip(state), fields(image_id = %id, operation = "list_related_images"))]
pub async fn list_related_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let related = state.store.list_related(&id).await?;
    Ok(Json(related))
}
