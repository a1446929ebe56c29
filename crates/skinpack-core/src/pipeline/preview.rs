//! Head preview generation.
//!
//! The launcher shows a rendered model for each skin. Rendering one is out of
//! scope, so the face is cut from the texture and blown up with
//! nearest-neighbour scaling, which keeps the pixel art crisp.

use image::{Rgba, RgbaImage};

/// Edge length of the generated preview, in pixels.
pub const PREVIEW_SIZE: u32 = 128;

/// Source rectangle of the face: `(x, y, width, height)`.
pub const HEAD_REGION: (u32, u32, u32, u32) = (8, 8, 8, 8);

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Render the head preview for a decoded skin.
///
/// Each source pixel becomes a solid `16x16` block. Source pixels that fall
/// outside the image are transparent.
pub fn render_head(pixels: &RgbaImage) -> RgbaImage {
    let (left, top, width, height) = HEAD_REGION;
    let scale_x = PREVIEW_SIZE / width;
    let scale_y = PREVIEW_SIZE / height;

    let mut preview = RgbaImage::new(PREVIEW_SIZE, PREVIEW_SIZE);
    for sy in 0..height {
        for sx in 0..width {
            let colour = pixels
                .get_pixel_checked(left + sx, top + sy)
                .copied()
                .unwrap_or(TRANSPARENT);

            // Fill scaled block
            for dy in 0..scale_y {
                for dx in 0..scale_x {
                    preview.put_pixel(sx * scale_x + dx, sy * scale_y + dy, colour);
                }
            }
        }
    }
    preview
}
