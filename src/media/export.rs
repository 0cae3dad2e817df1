// SPDX-License-Identifier: MPL-2.0
//! Avatar export: raster serialization and `data:` URL handling.
//!
//! Composited avatars leave the editor as base64 data URLs so the host can
//! store or upload them without touching the filesystem.

use crate::error::{Error, Result};
use base64::Engine;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::codecs::png::PngEncoder;
use image_rs::codecs::webp::WebPEncoder;
use image_rs::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

/// Supported export formats for the composited avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG format (lossless, best quality).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (lossless encoder).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::WebP => "image/webp",
        }
    }

    /// Returns all supported formats.
    #[must_use]
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::WebP]
    }

    /// Detects format from a MIME type.
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<ExportFormat> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.mime_type().eq_ignore_ascii_case(mime))
    }
}

/// Serialization quality, guaranteed to be within 0.0–1.0.
///
/// Only lossy encoders make use of it; it is forwarded uniformly anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// JPEG quality on the encoder's 1–100 scale.
    #[must_use]
    pub fn as_jpeg_quality(self) -> u8 {
        // 0.0..=1.0 maps onto 0..=100 so the cast cannot truncate.
        ((self.0 * 100.0).round() as u8).max(1)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(crate::config::DEFAULT_QUALITY)
    }
}

/// Straight (non-premultiplied) RGBA bytes of a pixmap.
#[must_use]
pub fn demultiplied_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

/// Encodes a premultiplied pixmap into the requested raster format.
pub fn encode_pixmap(pixmap: &Pixmap, format: ExportFormat, quality: Quality) -> Result<Vec<u8>> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = demultiplied_rgba(pixmap);

    let mut out = Vec::new();
    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut out).write_image(&rgba, width, height, ExtendedColorType::Rgba8)?;
        }
        ExportFormat::Jpeg => {
            let rgb: Vec<u8> = rgba
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut out, quality.as_jpeg_quality()).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::WebP => {
            WebPEncoder::new_lossless(&mut out).write_image(
                &rgba,
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
    }
    Ok(out)
}

/// Builds a base64 `data:` URL.
#[must_use]
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{payload}")
}

/// A parsed base64 `data:` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parses `data:<mime>;base64,<payload>`.
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidDataUrl("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidDataUrl("missing payload separator".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::InvalidDataUrl("only base64 payloads are supported".to_string()))?;

        let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    /// File extension matching the MIME type, defaulting to `png`.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        ExportFormat::from_mime_type(&self.mime_type)
            .unwrap_or_default()
            .extension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn solid_pixmap(size: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(size, size).expect("pixmap");
        pixmap.fill(Color::from_rgba8(10, 120, 200, 255));
        pixmap
    }

    #[test]
    fn png_data_url_round_trips_through_decoder() {
        let bytes = encode_pixmap(&solid_pixmap(12), ExportFormat::Png, Quality::default())
            .expect("encode");
        let url = to_data_url(ExportFormat::Png.mime_type(), &bytes);
        assert!(url.starts_with("data:image/png;base64,"));

        let parsed = DataUrl::parse(&url).expect("parse");
        assert_eq!(parsed.mime_type, "image/png");
        let decoded = image_rs::load_from_memory(&parsed.bytes).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (12, 12));
        assert_eq!(decoded.to_rgba8().get_pixel(3, 3).0, [10, 120, 200, 255]);
    }

    #[test]
    fn jpeg_export_has_requested_size() {
        let bytes = encode_pixmap(&solid_pixmap(16), ExportFormat::Jpeg, Quality::new(0.5))
            .expect("encode");
        let decoded = image_rs::load_from_memory(&bytes).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    #[test]
    fn quality_is_clamped() {
        assert_eq!(Quality::new(2.0).value(), 1.0);
        assert_eq!(Quality::new(-1.0).value(), 0.0);
        assert_eq!(Quality::new(f32::NAN), Quality::default());
        assert_eq!(Quality::new(0.9).as_jpeg_quality(), 90);
        assert_eq!(Quality::new(0.0).as_jpeg_quality(), 1);
    }

    #[test]
    fn parse_rejects_malformed_urls() {
        assert!(matches!(
            DataUrl::parse("http://example.com/a.png"),
            Err(Error::InvalidDataUrl(_))
        ));
        assert!(matches!(
            DataUrl::parse("data:image/png,plain"),
            Err(Error::InvalidDataUrl(_))
        ));
        assert!(matches!(
            DataUrl::parse("data:image/png;base64,@@@"),
            Err(Error::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn format_lookup_by_mime_type() {
        assert_eq!(ExportFormat::from_mime_type("image/jpeg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_mime_type("IMAGE/WEBP"), Some(ExportFormat::WebP));
        assert_eq!(ExportFormat::from_mime_type("image/gif"), None);
        assert_eq!(ExportFormat::WebP.extension(), "webp");
    }
}
