//! Fixture collection served in mock mode.

use chrono::{DateTime, TimeZone, Utc};
use galleria_core::models::{Category, Dimensions, Image};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    thumbnail_url: &'static str,
    category: Category,
    tags: &'static [&'static str],
    uploaded_at: (i32, u32, u32, u32, u32, u32),
    size: u64,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "1",
        title: "Mountain Landscape",
        description: "Beautiful mountain scenery during golden hour",
        url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=300&h=200&fit=crop",
        category: Category::Nature,
        tags: &["mountain", "landscape", "sunset", "nature"],
        uploaded_at: (2024, 1, 15, 10, 30, 0),
        size: 2_150_000,
    },
    Seed {
        id: "2",
        title: "City Lights",
        description: "Urban nightscape with vibrant colors",
        url: "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=300&h=200&fit=crop",
        category: Category::Urban,
        tags: &["city", "night", "lights", "urban"],
        uploaded_at: (2024, 1, 14, 18, 45, 0),
        size: 1_850_000,
    },
    Seed {
        id: "3",
        title: "Ocean Waves",
        description: "Peaceful ocean waves meeting the shore",
        url: "https://images.unsplash.com/photo-1439066615861-d1af74d74000?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1439066615861-d1af74d74000?w=300&h=200&fit=crop",
        category: Category::Nature,
        tags: &["ocean", "waves", "beach", "water"],
        uploaded_at: (2024, 1, 13, 14, 20, 0),
        size: 1_950_000,
    },
    Seed {
        id: "4",
        title: "Forest Path",
        description: "A winding path through a dense forest",
        url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=300&h=200&fit=crop",
        category: Category::Nature,
        tags: &["forest", "path", "trees", "hiking"],
        uploaded_at: (2024, 1, 12, 9, 15, 0),
        size: 2_250_000,
    },
    Seed {
        id: "5",
        title: "Modern Architecture",
        description: "Contemporary building with geometric design",
        url: "https://images.unsplash.com/photo-1448630360428-65456885c650?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1448630360428-65456885c650?w=300&h=200&fit=crop",
        category: Category::Architecture,
        tags: &["architecture", "building", "modern", "geometric"],
        uploaded_at: (2024, 1, 11, 16, 0, 0),
        size: 1_750_000,
    },
    Seed {
        id: "6",
        title: "Abstract Art",
        description: "Colorful abstract composition",
        url: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=800&h=600&fit=crop",
        thumbnail_url:
            "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=300&h=200&fit=crop",
        category: Category::Art,
        tags: &["abstract", "colorful", "art", "creative"],
        uploaded_at: (2024, 1, 10, 12, 30, 0),
        size: 1_650_000,
    },
];

fn timestamp((y, mo, d, h, mi, s): (i32, u32, u32, u32, u32, u32)) -> DateTime<Utc> {
    // Fixture timestamps are statically valid
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// The six-record fixture gallery, newest first.
pub fn seed_images() -> Vec<Image> {
    SEEDS
        .iter()
        .map(|seed| Image {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: Some(seed.description.to_string()),
            url: seed.url.to_string(),
            thumbnail_url: seed.thumbnail_url.to_string(),
            category: seed.category,
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            uploaded_at: timestamp(seed.uploaded_at),
            size: seed.size,
            dimensions: Dimensions {
                width: 800,
                height: 600,
            },
            mime_type: "image/jpeg".to_string(),
        })
        .collect()
}
