//! Filter/match engine
//!
//! Pure functions mapping the image collection and an [`ImageFilters`] to
//! the matching subset. This is a stable filter, not a search engine: no
//! ranking, no pagination, original collection order preserved.

use crate::models::{Image, ImageFilters};

/// Maximum number of records returned by [`related_images`].
pub const RELATED_IMAGES_LIMIT: usize = 4;

/// Whether a single record satisfies every active constraint.
///
/// Constraints combine with logical AND. Tag matching is OR within the
/// requested set (any intersecting tag suffices, compared by exact
/// membership). Search is a case-insensitive substring match against the
/// title, the description when present, or any tag; the needle is trimmed
/// first and an empty needle deactivates the constraint.
pub fn matches(image: &Image, filters: &ImageFilters) -> bool {
    if let Some(category) = filters.category {
        if image.category != category {
            return false;
        }
    }

    if !filters.tags.is_empty()
        && !filters
            .tags
            .iter()
            .any(|tag| image.tags.iter().any(|t| t == tag))
    {
        return false;
    }

    if let Some(search) = filters.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_title = image.title.to_lowercase().contains(&needle);
            let in_description = image
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            let in_tags = image.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            if !in_title && !in_description && !in_tags {
                return false;
            }
        }
    }

    true
}

/// Stable filter over the collection: the sub-sequence of records
/// satisfying [`matches`], relative order preserved.
pub fn filter_images<'a>(images: &'a [Image], filters: &ImageFilters) -> Vec<&'a Image> {
    images.iter().filter(|image| matches(image, filters)).collect()
}

/// Up to [`RELATED_IMAGES_LIMIT`] records related to the target: same
/// category or at least one shared tag, never the target itself, collection
/// order preserved (truncated, not scored). An unknown id yields the empty
/// list.
pub fn related_images<'a>(images: &'a [Image], id: &str) -> Vec<&'a Image> {
    let Some(target) = images.iter().find(|image| image.id == id) else {
        return Vec::new();
    };

    images
        .iter()
        .filter(|image| image.id != target.id)
        .filter(|image| {
            image.category == target.category
                || image.tags.iter().any(|tag| target.tags.contains(tag))
        })
        .take(RELATED_IMAGES_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Dimensions};
    use chrono::Utc;

    fn image(id: &str, title: &str, category: Category, tags: &[&str]) -> Image {
        Image {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(format!("{} description", title)),
            url: format!("https://example.com/{}.jpg", id),
            thumbnail_url: format!("https://example.com/{}-thumb.jpg", id),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            uploaded_at: Utc::now(),
            size: 1_000_000,
            dimensions: Dimensions {
                width: 800,
                height: 600,
            },
            mime_type: "image/jpeg".to_string(),
        }
    }

    fn collection() -> Vec<Image> {
        vec![
            image(
                "1",
                "Mountain Landscape",
                Category::Nature,
                &["mountain", "forest"],
            ),
            image("2", "City Lights", Category::Urban, &["city", "night"]),
            image("3", "Ocean Waves", Category::Nature, &["ocean", "waves"]),
            image(
                "4",
                "Modern Building",
                Category::Architecture,
                &["building", "modern"],
            ),
            image("5", "Forest Path", Category::Nature, &["forest", "path"]),
            image("6", "Night Market", Category::Urban, &["night", "market"]),
        ]
    }

    fn ids(images: &[&Image]) -> Vec<String> {
        images.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn no_active_constraints_returns_full_collection_in_order() {
        let images = collection();
        let result = filter_images(&images, &ImageFilters::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);

        // Whitespace-only search is inactive too
        let filters = ImageFilters {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_images(&images, &filters).len(), images.len());
    }

    #[test]
    fn category_constraint_is_exact_equality() {
        let images = collection();
        let filters = ImageFilters {
            category: Some(Category::Nature),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["1", "3", "5"]);
    }

    #[test]
    fn tag_constraint_matches_any_requested_tag() {
        let images = collection();
        // A record with [mountain, forest] matches the request [forest, ocean]
        let filters = ImageFilters {
            tags: vec!["forest".to_string(), "ocean".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["1", "3", "5"]);
    }

    #[test]
    fn tag_constraint_is_exact_membership_not_substring() {
        let images = collection();
        let filters = ImageFilters {
            tags: vec!["mount".to_string()],
            ..Default::default()
        };
        assert!(filter_images(&images, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let images = collection();
        let filters = ImageFilters {
            search: Some("MOUNT".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["1"]);
    }

    #[test]
    fn search_matches_description_and_tags() {
        let images = collection();

        // Description contains the title, so "waves description" hits id 3
        let filters = ImageFilters {
            search: Some("waves description".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["3"]);

        // Tag substring: "arke" only appears in the "market" tag
        let filters = ImageFilters {
            search: Some("arke".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["6"]);
    }

    #[test]
    fn search_needle_is_trimmed_before_matching() {
        let images = collection();
        let filters = ImageFilters {
            search: Some("  ocean  ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["3"]);
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let images = collection();
        let filters = ImageFilters {
            category: Some(Category::Nature),
            tags: vec!["forest".to_string()],
            search: Some("path".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_images(&images, &filters)), vec!["5"]);

        // Same tag and search, wrong category: nothing matches
        let filters = ImageFilters {
            category: Some(Category::Urban),
            ..filters
        };
        assert!(filter_images(&images, &filters).is_empty());
    }

    #[test]
    fn matches_is_deterministic_and_side_effect_free() {
        let images = collection();
        let filters = ImageFilters {
            category: Some(Category::Urban),
            ..Default::default()
        };
        let first = filter_images(&images, &filters);
        let second = filter_images(&images, &filters);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn related_excludes_target_and_preserves_order() {
        let images = collection();
        let related = related_images(&images, "1");
        // Same category: 3, 5; shared tag "forest": 5 (already counted)
        assert_eq!(ids(&related), vec!["3", "5"]);
        assert!(related.iter().all(|image| image.id != "1"));
    }

    #[test]
    fn related_is_truncated_to_limit() {
        let mut images = collection();
        for i in 7..=12 {
            images.push(image(
                &i.to_string(),
                "Another Nature Shot",
                Category::Nature,
                &["outdoors"],
            ));
        }
        let related = related_images(&images, "1");
        assert_eq!(related.len(), RELATED_IMAGES_LIMIT);
        assert_eq!(ids(&related), vec!["3", "5", "7", "8"]);
    }

    #[test]
    fn related_for_unknown_id_is_empty() {
        let images = collection();
        assert!(related_images(&images, "nonexistent-id").is_empty());
    }
}
