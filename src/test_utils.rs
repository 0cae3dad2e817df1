// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and shared fixtures.

pub use approx::assert_abs_diff_eq;

use crate::media::RasterImage;
use image_rs::{DynamicImage, Rgba, RgbaImage};

/// Builds an opaque raster whose left half is red and right half is blue,
/// so rotation and panning are visible in exported pixels.
pub fn two_tone_raster(width: u32, height: u32) -> RasterImage {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    RasterImage::from_dynamic(&DynamicImage::ImageRgba8(img), Some("image/png"))
        .expect("test raster")
}
