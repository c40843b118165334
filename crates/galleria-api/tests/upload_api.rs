mod common;

use axum_test::multipart::{MultipartForm, Part};
use common::{test_server, test_server_with_policy};
use galleria_core::UploadPolicy;
use serde_json::{json, Value};

// 1x1 PNG
fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD,
        0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
        0x82, // IEND chunk
    ]
}

fn upload_form(title: &str, bytes: Vec<u8>, content_type: &str) -> MultipartForm {
    let size = bytes.len();
    MultipartForm::new()
        .add_text("title", title)
        .add_text("description", "Uploaded from a test")
        .add_text("category", "nature")
        .add_text("tags", "Sunset")
        .add_text("tags", "SUNSET")
        .add_text("tags", "beach")
        .add_part(
            "file",
            Part::bytes(bytes)
                .file_name(format!("upload-{}.bin", size))
                .mime_type(content_type),
        )
}

#[tokio::test]
async fn upload_creates_image_with_normalized_metadata() {
    let server = test_server();

    let bytes = png_bytes();
    let size = bytes.len();
    let response = server
        .post("/images/upload")
        .multipart(upload_form("Evening Beach", bytes, "image/png"))
        .await;

    assert_eq!(response.status_code(), 201);
    let image: Value = response.json();
    assert!(!image["id"].as_str().unwrap().is_empty());
    assert_eq!(image["title"], "Evening Beach");
    assert_eq!(image["category"], "nature");
    assert_eq!(image["tags"], json!(["sunset", "beach"]));
    assert_eq!(image["mimeType"], "image/png");
    assert_eq!(image["size"], size);
    // No processing pipeline: thumbnail is the original rendition
    assert_eq!(image["thumbnailUrl"], image["url"]);
}

#[tokio::test]
async fn upload_accepts_multi_megabyte_file_within_limit() {
    let server = test_server();

    let size = 3 * 1024 * 1024;
    let mut bytes = png_bytes();
    bytes.resize(size, 0);
    let response = server
        .post("/images/upload")
        .multipart(upload_form("Large Panorama", bytes, "image/png"))
        .await;

    assert_eq!(response.status_code(), 201);
    let image: Value = response.json();
    assert_eq!(image["size"], size);
}

#[tokio::test]
async fn upload_over_request_body_limit_is_payload_too_large() {
    let server = test_server();

    // 11 MiB exceeds the transport cap (configured file limit plus the
    // multipart field headroom), so the request is cut off before the
    // policy check runs.
    let response = server
        .post("/images/upload")
        .multipart(upload_form(
            "Oversized",
            vec![0u8; 11 * 1024 * 1024],
            "image/png",
        ))
        .await;

    assert_eq!(response.status_code(), 413);
}

#[tokio::test]
async fn upload_rejects_unsupported_content_type() {
    let server = test_server();

    let response = server
        .post("/images/upload")
        .multipart(upload_form("Bitmap", vec![0u8; 64], "image/bmp"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid content type: image/bmp"));
}

#[tokio::test]
async fn upload_rejects_file_over_size_limit() {
    let server = test_server_with_policy(UploadPolicy {
        max_file_size: 1024,
        ..UploadPolicy::default()
    });

    let response = server
        .post("/images/upload")
        .multipart(upload_form("Too Big", vec![0u8; 2048], "image/png"))
        .await;

    assert_eq!(response.status_code(), 413);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn upload_without_file_field_is_a_bad_request() {
    let server = test_server();

    let form = MultipartForm::new()
        .add_text("title", "No File")
        .add_text("category", "art");
    let response = server.post("/images/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Missing file field"));
}

#[tokio::test]
async fn upload_with_blank_title_is_a_bad_request() {
    let server = test_server();

    let response = server
        .post("/images/upload")
        .multipart(upload_form("   ", png_bytes(), "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn update_merges_partial_changes() {
    let server = test_server();

    let response = server
        .put("/images/1")
        .json(&json!({ "title": "Renamed Landscape" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let image: Value = response.json();
    assert_eq!(image["title"], "Renamed Landscape");
    // Unset fields keep their stored values
    assert_eq!(
        image["description"],
        "Beautiful mountain scenery during golden hour"
    );
    assert_eq!(image["category"], "nature");
}

#[tokio::test]
async fn update_unknown_image_is_not_found() {
    let server = test_server();

    let response = server
        .put("/images/nonexistent-id")
        .json(&json!({ "title": "Ghost" }))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn update_with_invalid_category_is_rejected() {
    let server = test_server();

    let response = server
        .put("/images/1")
        .json(&json!({ "category": "landscapes" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn delete_succeeds_for_known_id_and_404s_otherwise() {
    let server = test_server();

    let response = server.delete("/images/1").await;
    assert_eq!(response.status_code(), 204);

    let response = server.delete("/images/nonexistent-id").await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}
