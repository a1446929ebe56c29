//! Arm model detection.
//!
//! Slim skins leave a column of each arm texture unused. Two pixels inside
//! those columns are probed: both fully transparent means slim.

use image::RgbaImage;
use serde::Serialize;

/// Pixel coordinates probed for transparency, as `(x, y)`.
pub const SLIM_PROBES: [(u32, u32); 2] = [(51, 16), (42, 48)];

/// Player model variant selected by a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinModel {
    Classic,
    Slim,
}

impl SkinModel {
    pub fn from_slim(slim: bool) -> Self {
        if slim {
            Self::Slim
        } else {
            Self::Classic
        }
    }
}

impl std::fmt::Display for SkinModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinModel::Classic => write!(f, "classic"),
            SkinModel::Slim => write!(f, "slim"),
        }
    }
}

/// Returns `true` if the skin uses the slim arm model.
///
/// A probe outside the image counts as opaque, so undersized images
/// (e.g. legacy 64x32 skins) classify as classic.
pub fn is_slim(pixels: &RgbaImage) -> bool {
    SLIM_PROBES.iter().all(|&(x, y)| match pixels.get_pixel_checked(x, y) {
        Some(pixel) => pixel.0[3] == 0,
        None => {
            tracing::debug!(
                "Probe ({}, {}) outside {}x{} skin, assuming classic",
                x,
                y,
                pixels.width(),
                pixels.height()
            );
            false
        }
    })
}
