//! Base64 data URIs for embedding images in the document.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Wrap raw bytes as `data:<mime>;base64,<payload>`.
pub fn encode_bytes(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Encode pixels as PNG and wrap them in a data URI.
pub fn encode_png(pixels: &RgbaImage) -> image::ImageResult<String> {
    let mut buffer = Cursor::new(Vec::new());
    pixels.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(encode_bytes(&buffer.into_inner(), "image/png"))
}

/// Split a data URI back into its MIME type and decoded payload.
///
/// Returns `None` for anything that is not a base64 data URI.
pub fn decode(uri: &str) -> Option<(&str, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = BASE64.decode(payload).ok()?;
    Some((mime, bytes))
}
