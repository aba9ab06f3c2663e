//! KYC photo normalization and MIME inference.
//!
//! Uploaded photos arrive in whatever format the kiosk camera or phone
//! produces. Formats the `image` crate can decode are re-encoded to JPEG so
//! the database holds one predictable format; anything else (HEIC most
//! commonly) is stored as received and served with a sniffed MIME type.

use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use std::io::Cursor;

/// JPEG quality for normalized photos.
const JPEG_QUALITY: u8 = 85;

/// Maximum accepted photo size (8MB per file part).
pub const MAX_PHOTO_SIZE: usize = 8 * 1024 * 1024;

/// Normalizes an uploaded photo to JPEG when the source format is decodable.
///
/// Already-JPEG bytes pass through untouched; decodable non-JPEG formats are
/// re-encoded; undecodable bytes are returned as-is.
pub fn normalize_photo(data: Vec<u8>) -> Vec<u8> {
    match image::guess_format(&data) {
        Ok(ImageFormat::Jpeg) => data,
        Ok(format) => match image::load_from_memory_with_format(&data, format) {
            Ok(decoded) => {
                let mut out = Vec::new();
                let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), JPEG_QUALITY);
                match decoded.write_with_encoder(encoder) {
                    Ok(()) => out,
                    Err(err) => {
                        tracing::warn!(error = %err, "Photo re-encode failed, storing original");
                        data
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Photo decode failed, storing original");
                data
            }
        },
        Err(_) => data,
    }
}

/// Infers the MIME type of a stored photo from its magic bytes.
pub fn sniff_mime(data: &[u8]) -> &'static str {
    match image::guess_format(data) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::Bmp) => "image/bmp",
        Ok(ImageFormat::Tiff) => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest well-formed 1x1 PNG.
    fn tiny_png() -> Vec<u8> {
        let mut out = Vec::new();
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([128, 64, 32]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_png_is_normalized_to_jpeg() {
        let normalized = normalize_photo(tiny_png());
        assert_eq!(sniff_mime(&normalized), "image/jpeg");
    }

    #[test]
    fn test_jpeg_passes_through() {
        let jpeg = normalize_photo(tiny_png());
        let again = normalize_photo(jpeg.clone());
        assert_eq!(again, jpeg);
    }

    #[test]
    fn test_undecodable_bytes_pass_through() {
        let garbage = vec![0x00, 0x01, 0x02, 0x03, 0x04];
        let kept = normalize_photo(garbage.clone());
        assert_eq!(kept, garbage);
        assert_eq!(sniff_mime(&kept), "application/octet-stream");
    }

    #[test]
    fn test_sniff_png() {
        assert_eq!(sniff_mime(&tiny_png()), "image/png");
    }
}
