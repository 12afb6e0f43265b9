//! Image normalization: decode, force RGB, resize, JPEG-encode.
//!
//! Output is uniform regardless of source encoding (PNG palette, RGBA,
//! grayscale). The resize is forced to the target resolution; aspect ratio
//! is not preserved.

use crate::retry::AcquireError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use std::io::Cursor;

/// Normalizes raw image bytes to fixed-size RGB JPEGs.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    target: (u32, u32),
    quality: u8,
}

impl Normalizer {
    /// Both `target` dimensions must be positive.
    pub fn new(target: (u32, u32), quality: u8) -> Self {
        debug_assert!(target.0 > 0 && target.1 > 0);
        Self { target, quality }
    }

    /// Decodes `raw`, converts to 3-channel RGB, resizes with Lanczos3 to
    /// the target resolution, and returns the JPEG-encoded result.
    pub fn normalize(&self, raw: &[u8]) -> Result<Vec<u8>, AcquireError> {
        let decoded = image::load_from_memory(raw)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = self.target;
        let resized = imageops::resize(&rgb, width, height, FilterType::Lanczos3);

        let mut out = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut out, self.quality);
        resized.write_with_encoder(encoder)?;
        Ok(out.into_inner())
    }
}
