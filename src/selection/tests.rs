//! Tests for media type sniffing and preview decoding

use super::*;
use crate::test_fixture::{image_bytes, png_file, text_file};

#[test]
fn test_sniff_png_by_magic_bytes() {
    let bytes = image_bytes(2, 2, ImageFormat::Png);
    // Misleading extension, magic bytes win
    assert_eq!(sniff_media_type("scan.dat", &bytes), "image/png");
}

#[test]
fn test_sniff_jpeg_by_magic_bytes() {
    let bytes = image_bytes(2, 2, ImageFormat::Jpeg);
    assert_eq!(sniff_media_type("scan", &bytes), "image/jpeg");
}

#[test]
fn test_sniff_falls_back_to_extension() {
    assert_eq!(sniff_media_type("scan.png", b"not really"), "image/png");
}

#[test]
fn test_sniff_unknown_is_octet_stream() {
    assert_eq!(
        sniff_media_type("notes.txt", b"hello there"),
        "application/octet-stream"
    );
}

#[test]
fn test_is_image() {
    assert!(png_file("a.png", 1, 1).is_image());
    assert!(!text_file("notes.txt").is_image());
}

#[test]
fn test_ensure_image_rejects_text() {
    let err = text_file("notes.txt").ensure_image().unwrap_err();
    assert!(matches!(err, SelectionError::NotAnImage { .. }));
    assert_eq!(err.notice(), "notes.txt is not an image");
}

#[test]
fn test_decode_preview_reads_dimensions() {
    let preview = decode_preview_blocking(&png_file("scan.png", 7, 5)).unwrap();

    assert_eq!((preview.width, preview.height), (7, 5));
    assert!(preview.data_url.starts_with("data:image/png;base64,iVBOR"));
    assert_eq!(preview.caption(), "7 × 5 px");
}

#[test]
fn test_decode_preview_fails_on_garbage() {
    // Extension says png, content disagrees
    let file = SelectedFile::from_bytes("broken.png", b"definitely not pixels".to_vec());
    assert!(file.is_image());

    let err = decode_preview_blocking(&file).unwrap_err();
    assert!(matches!(err, SelectionError::Decode { .. }));
    assert_eq!(err.notice(), "Could not open broken.png as an image");
}

#[tokio::test]
async fn test_decode_preview_async() {
    let preview = decode_preview(png_file("scan.png", 3, 3)).await.unwrap();
    assert_eq!(preview.width, 3);
}

#[tokio::test]
async fn test_read_missing_file() {
    let err = SelectedFile::read(Path::new("/definitely/missing/scan.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, SelectionError::Unreadable { .. }));
    assert_eq!(err.notice(), "Could not read scan.png");
}

#[tokio::test]
async fn test_read_from_disk_uses_file_name() {
    let path = std::env::temp_dir().join(format!("mri-scan-analyzer-{}.png", std::process::id()));
    tokio::fs::write(&path, image_bytes(4, 4, ImageFormat::Png))
        .await
        .unwrap();

    let file = SelectedFile::read(&path).await.unwrap();
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(file.name(), path.file_name().unwrap().to_string_lossy());
    assert_eq!(file.media_type(), "image/png");
    assert!(!file.bytes().is_empty());
}
