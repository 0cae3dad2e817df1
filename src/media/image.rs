// SPDX-License-Identifier: MPL-2.0
//! Decoded raster images ready to be composited into the avatar frame.

use crate::error::{Error, Result};
use image_rs::DynamicImage;
use std::sync::Arc;
use tiny_skia::{ColorU8, Pixmap};

/// An immutable decoded bitmap.
///
/// Pixels are kept premultiplied in a [`Pixmap`] so the renderer can draw
/// them directly. The pixmap lives behind an `Arc`, which keeps clones
/// (e.g. inside editor messages) cheap.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    mime_type: Option<&'static str>,
    pixmap: Arc<Pixmap>,
}

impl RasterImage {
    /// Converts a decoded image into a premultiplied raster.
    pub fn from_dynamic(image: &DynamicImage, mime_type: Option<&'static str>) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Decode(format!("invalid image size {width}x{height}")))?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        Ok(Self {
            width,
            height,
            mime_type,
            pixmap: Arc::new(pixmap),
        })
    }

    /// Decodes encoded bytes (PNG, JPEG, WebP, ...) into a raster.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mime_type = sniff_mime_type(bytes);
        let image = image_rs::load_from_memory(bytes)?;
        Self::from_dynamic(&image, mime_type)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// MIME type detected from the encoded source, if any.
    #[must_use]
    pub fn mime_type(&self) -> Option<&'static str> {
        self.mime_type
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Whether both rasters share the same pixel storage.
    #[must_use]
    pub fn same_pixels(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }
}

/// Detects the MIME type of encoded image bytes from their magic number.
#[must_use]
pub fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    image_rs::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn from_dynamic_keeps_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(7, 3, Rgba([1, 2, 3, 255])));
        let raster = RasterImage::from_dynamic(&img, None).expect("raster");
        assert_eq!(raster.width(), 7);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixmap().width(), 7);
    }

    #[test]
    fn pixels_are_premultiplied() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 128])));
        let raster = RasterImage::from_dynamic(&img, None).expect("raster");
        let px = raster.pixmap().pixels()[0];
        assert_eq!(px.alpha(), 128);
        assert!(px.red() < 200);
        assert!(px.red() <= px.alpha());
    }

    #[test]
    fn decode_detects_png_mime_type() {
        let bytes = encode_png(&RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        let raster = RasterImage::decode(&bytes).expect("decode");
        assert_eq!(raster.mime_type(), Some("image/png"));
        assert_eq!(raster.width(), 4);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = RasterImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn clones_share_pixels() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])));
        let raster = RasterImage::from_dynamic(&img, None).expect("raster");
        let copy = raster.clone();
        assert!(raster.same_pixels(&copy));
    }
}
