//! Pure-path tests for the storage helpers: object naming, public URLs,
//! and reconstructing a bucket path from a stored image URL. The network
//! side of `StorageClient` is not exercised here.

use uuid::Uuid;

use folio_backend::handlers::site::mailto_link;
use folio_backend::storage::{
    StorageClient, content_type_for, object_path_from_url, unique_object_name,
};

#[test]
fn object_name_keeps_the_original_extension() {
    let name = unique_object_name("screenshot.png");
    assert!(name.ends_with(".png"));
    assert_ne!(name, "screenshot.png");

    // The stem is a fresh UUID.
    let stem = name.strip_suffix(".png").unwrap();
    assert!(Uuid::parse_str(stem).is_ok());
}

#[test]
fn object_names_are_unique_per_call() {
    assert_ne!(unique_object_name("a.jpg"), unique_object_name("a.jpg"));
}

#[test]
fn extensionless_and_dotfile_names_get_a_bare_uuid() {
    assert!(Uuid::parse_str(&unique_object_name("README")).is_ok());
    assert!(Uuid::parse_str(&unique_object_name(".env")).is_ok());
}

#[test]
fn public_url_points_into_the_bucket() {
    let storage = StorageClient::new("https://proj.supabase.co/", "key", "portfolio-images");
    let id = Uuid::new_v4();

    assert_eq!(
        storage.public_url(&format!("{id}/photo.png")),
        format!("https://proj.supabase.co/storage/v1/object/public/portfolio-images/{id}/photo.png")
    );
}

#[test]
fn bucket_path_is_rebuilt_from_the_trailing_url_segment() {
    let id = Uuid::new_v4();
    let url = format!(
        "https://proj.supabase.co/storage/v1/object/public/portfolio-images/{id}/abc123.png"
    );

    assert_eq!(
        object_path_from_url(id, &url),
        Some(format!("{id}/abc123.png"))
    );
}

#[test]
fn unusable_image_urls_are_skipped() {
    let id = Uuid::new_v4();
    assert_eq!(object_path_from_url(id, "https://"), None);
    assert_eq!(object_path_from_url(id, ""), None);
}

#[test]
fn content_type_falls_back_to_octet_stream() {
    assert_eq!(content_type_for("a.png"), "image/png");
    assert_eq!(content_type_for("a.JPG"), "image/jpeg");
    assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
    assert_eq!(content_type_for("a.webp"), "image/webp");
    assert_eq!(content_type_for("archive.zip"), "application/octet-stream");
    assert_eq!(content_type_for("no-extension"), "application/octet-stream");
}

#[test]
fn mailto_link_percent_encodes_subject_and_body() {
    assert_eq!(
        mailto_link("me@example.com", "Hello & hi", "Line one"),
        "mailto:me@example.com?subject=Hello%20%26%20hi&body=Line%20one"
    );
}

#[test]
fn mailto_link_omits_empty_parameters() {
    assert_eq!(mailto_link("me@example.com", "", ""), "mailto:me@example.com");
    assert_eq!(
        mailto_link("me@example.com", "Hi", ""),
        "mailto:me@example.com?subject=Hi"
    );
}
