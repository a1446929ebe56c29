//! Skin decoding with content-based format detection.

use image::{ImageFormat, RgbaImage};

use crate::error::{PipelineError, PipelineResult};

/// Decodes skin bytes into an RGBA pixel grid.
pub struct SkinDecoder;

/// Result of decoding a skin.
#[derive(Debug)]
pub struct DecodedSkin {
    /// RGBA pixels at the source resolution
    pub pixels: RgbaImage,
    /// Format detected from the byte signature
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl SkinDecoder {
    /// Decode a byte buffer on the blocking pool.
    ///
    /// `name` is only used to label errors.
    pub async fn decode(bytes: Vec<u8>, name: &str) -> PipelineResult<DecodedSkin> {
        let owned_name = name.to_string();
        tokio::task::spawn_blocking(move || Self::decode_sync(&bytes, &owned_name))
            .await
            .map_err(|e| PipelineError::ContextUnavailable {
                name: name.to_string(),
                message: format!("Task join error: {}", e),
            })?
    }

    /// Synchronous decode (runs in spawn_blocking).
    pub fn decode_sync(bytes: &[u8], name: &str) -> PipelineResult<DecodedSkin> {
        let format = image::guess_format(bytes).map_err(|e| PipelineError::Decode {
            name: name.to_string(),
            message: format!("Cannot detect image format: {}", e),
        })?;
        let image =
            image::load_from_memory_with_format(bytes, format).map_err(|e| PipelineError::Decode {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let pixels = image.to_rgba8();
        let (width, height) = pixels.dimensions();
        Ok(DecodedSkin {
            pixels,
            format,
            width,
            height,
        })
    }
}

/// MIME type used in the `skinImage` data URI.
pub fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type(ImageFormat::Png), "image/png");
        assert_eq!(mime_type(ImageFormat::Jpeg), "image/jpeg");
        assert_eq!(mime_type(ImageFormat::Tiff), "application/octet-stream");
    }

    #[test]
    fn test_decode_png() {
        let decoded = SkinDecoder::decode_sync(&png_bytes(64, 32), "steve.png").unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (64, 32));
        assert_eq!(decoded.pixels.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = SkinDecoder::decode_sync(b"not an image", "notes.png").unwrap_err();
        match err {
            PipelineError::Decode { name, .. } => assert_eq!(name, "notes.png"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_truncated_png_fails() {
        let bytes = png_bytes(64, 64);
        let err = SkinDecoder::decode_sync(&bytes[..40], "cut.png").unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_async_decode() {
        let decoded = SkinDecoder::decode(png_bytes(64, 64), "alex.png")
            .await
            .unwrap();
        assert_eq!((decoded.width, decoded.height), (64, 64));
    }
}
