//! Image verification and resizing

use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;

/// Check that `bytes` start like a known image format
///
/// Sniffs magic bytes only. Guards against HTML error pages and redirects
/// served in place of an image.
pub fn verify_image(bytes: &[u8]) -> Result<ImageFormat, String> {
    if bytes.is_empty() {
        return Err("empty response body".to_string());
    }
    image::guess_format(bytes).map_err(|e| format!("unrecognized image format: {e}"))
}

/// Decode, resize to exactly `width` x `height` with Lanczos3, encode as PNG
pub fn resize_to_png(bytes: &[u8], (width, height): (u32, u32)) -> Result<Vec<u8>, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("failed to decode image: {e}"))?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    let mut buf = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| format!("failed to encode PNG: {e}"))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn recognizes_png() {
        assert_eq!(verify_image(&png_bytes(4, 4)), Ok(ImageFormat::Png));
    }

    #[test]
    fn rejects_html_and_empty_bodies() {
        assert!(verify_image(b"<!DOCTYPE html><html><body>Not found</body></html>").is_err());
        assert!(verify_image(b"").is_err());
    }

    #[test]
    fn resize_produces_exact_dimensions() {
        let out = resize_to_png(&png_bytes(40, 20), (8, 8)).unwrap();
        let decoded = image::load_from_memory_with_format(&out, ImageFormat::Png).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn resize_rejects_garbage() {
        assert!(resize_to_png(b"definitely not an image", (8, 8)).is_err());
    }
}
