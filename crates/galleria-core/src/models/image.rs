use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Maximum title length in characters, enforced at the input boundary.
pub const MAX_TITLE_LENGTH: usize = 100;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Maximum number of tags per image after normalization.
pub const MAX_TAGS: usize = 10;

/// Closed set of gallery categories. The `all` filter wildcard is not a
/// member: it parses to "no category constraint" at the query boundary and
/// is never a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nature,
    Urban,
    Architecture,
    Art,
    People,
    Animals,
    Technology,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Category::Nature => write!(f, "nature"),
            Category::Urban => write!(f, "urban"),
            Category::Architecture => write!(f, "architecture"),
            Category::Art => write!(f, "art"),
            Category::People => write!(f, "people"),
            Category::Animals => write!(f, "animals"),
            Category::Technology => write!(f, "technology"),
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nature" => Ok(Category::Nature),
            "urban" => Ok(Category::Urban),
            "architecture" => Ok(Category::Architecture),
            "art" => Ok(Category::Art),
            "people" => Ok(Category::People),
            "animals" => Ok(Category::Animals),
            "technology" => Ok(Category::Technology),
            _ => Err(anyhow::anyhow!("Invalid category: {}", s)),
        }
    }
}

/// Pixel dimensions of an image rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A stored image record. Immutable once created except through an explicit
/// partial update; `id`, `uploaded_at`, `size`, `dimensions`, and
/// `mime_type` never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub thumbnail_url: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
    pub size: u64,
    pub dimensions: Dimensions,
    pub mime_type: String,
}

/// The raw file payload accompanying an image creation.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Input for creating an image record.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub file: FilePayload,
}

impl CreateImage {
    /// Enforce the boundary constraints (title/description length, tag
    /// normalization) and return the normalized input.
    pub fn validated(mut self) -> Result<Self, AppError> {
        self.title = validated_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        self.tags = validated_tags(&self.tags)?;
        Ok(self)
    }
}

/// Partial update of image metadata. `None` fields keep their current
/// value; there is no way to unset a description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateImage {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
    }

    /// Enforce boundary constraints on every field that is present.
    pub fn validated(mut self) -> Result<Self, AppError> {
        if let Some(title) = &self.title {
            self.title = Some(validated_title(title)?);
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(tags) = &self.tags {
            self.tags = Some(validated_tags(tags)?);
        }
        Ok(self)
    }

    /// Merge this partial update into an existing record.
    pub fn apply_to(self, mut image: Image) -> Image {
        if let Some(title) = self.title {
            image.title = title;
        }
        if let Some(description) = self.description {
            image.description = Some(description);
        }
        if let Some(category) = self.category {
            image.category = category;
        }
        if let Some(tags) = self.tags {
            image.tags = tags;
        }
        image
    }
}

/// Transient query description used to narrow the collection. An absent
/// category (or the `all` wildcard at the parse boundary), an empty tag
/// set, and an empty search string each mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageFilters {
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub search: Option<String>,
}

impl ImageFilters {
    /// Whether every constraint is inactive; an unconstrained query returns
    /// the full collection.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.tags.is_empty()
            && self
                .search
                .as_deref()
                .map(|s| s.trim().is_empty())
                .unwrap_or(true)
    }
}

fn validated_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Title exceeds {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(title.to_string())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Description exceeds {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// Lowercase, trim, and deduplicate tags preserving first-seen order, then
/// enforce the tag count limit.
fn validated_tags(tags: &[String]) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    if normalized.len() > MAX_TAGS {
        return Err(AppError::InvalidInput(format!(
            "A maximum of {} tags is allowed",
            MAX_TAGS
        )));
    }
    Ok(normalized)
}
