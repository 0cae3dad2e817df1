// SPDX-License-Identifier: MPL-2.0
//! Avatar compositing: live preview with guides, and clean export.
//!
//! Preview and export share one draw sequence:
//!
//! 1. clear the surface
//! 2. move the origin to the frame center
//! 3. rotate by the quarter-turn angle
//! 4. scale uniformly
//! 5. translate by the pan offset (image units, hence after the scale)
//! 6. draw the image centered on the origin
//!
//! The preview then adds rule-of-thirds guides and is clipped to the
//! cosmetic corner radius. The export runs steps 1–6 on a fresh offscreen
//! pixmap, so neither guides nor clipping can leak into it. Transforms are
//! plain values passed to each draw call; no matrix state carries over
//! between draws.

use super::state::Transform;
use crate::config::{GRID_LINE_ALPHA, GRID_LINE_WIDTH, MAX_BORDER_RADIUS_PERCENT};
use crate::media::export::{encode_pixmap, to_data_url, ExportFormat, Quality};
use crate::media::RasterImage;
use tiny_skia::{
    Color, FillRule, FilterQuality, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform as CanvasTransform,
};

/// Magic constant for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

/// Preview corner radius in percent of the frame (50% = circle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRadius(f32);

impl BorderRadius {
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(0.0, MAX_BORDER_RADIUS_PERCENT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Radius in pixels for a frame of `frame_size`.
    #[must_use]
    pub fn pixels(self, frame_size: f32) -> f32 {
        frame_size * self.0 / 100.0
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self(crate::config::DEFAULT_BORDER_RADIUS_PERCENT)
    }
}

/// Owns the preview surface.
#[derive(Debug, Clone)]
pub struct Renderer {
    frame_size: u32,
    surface: Option<Pixmap>,
    clip: Option<Mask>,
}

impl Renderer {
    /// Allocates the preview surface. A zero-sized frame leaves the
    /// renderer without a surface, and every draw becomes a no-op.
    pub fn new(frame_size: u32, border_radius: BorderRadius) -> Self {
        Self {
            frame_size,
            surface: Pixmap::new(frame_size, frame_size),
            clip: rounded_clip(frame_size, border_radius),
        }
    }

    #[must_use]
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    /// Last drawn preview, if a surface exists.
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// Draws the transformed image plus guides into the preview surface.
    pub fn draw_preview(&mut self, image: &RasterImage, transform: &Transform) -> Option<&Pixmap> {
        let surface = self.surface.as_mut()?;
        compose(surface, image, transform, self.clip.as_ref());
        draw_guides(surface, self.clip.as_ref());
        Some(surface)
    }

    /// Wipes the preview pixels.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.fill(Color::TRANSPARENT);
        }
    }
}

/// Renders the clean avatar offscreen and serializes it to a data URL.
///
/// Returns `None` when no surface can be allocated or encoding fails.
pub fn export_clean(
    image: &RasterImage,
    transform: &Transform,
    frame_size: u32,
    format: ExportFormat,
    quality: Quality,
) -> Option<String> {
    let mut offscreen = Pixmap::new(frame_size, frame_size)?;
    compose(&mut offscreen, image, transform, None);

    match encode_pixmap(&offscreen, format, quality) {
        Ok(bytes) => Some(to_data_url(format.mime_type(), &bytes)),
        Err(err) => {
            tracing::error!("Failed to encode avatar: {err}");
            None
        }
    }
}

/// Steps 1–6 of the draw sequence.
fn compose(target: &mut Pixmap, image: &RasterImage, transform: &Transform, clip: Option<&Mask>) {
    target.fill(Color::TRANSPARENT);

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    let matrix = image_matrix(image, transform, target.width() as f32);
    target.draw_pixmap(0, 0, image.pixmap().as_ref(), &paint, matrix, clip);
}

/// Maps image pixel coordinates into frame coordinates.
fn image_matrix(image: &RasterImage, transform: &Transform, frame_size: f32) -> CanvasTransform {
    let half = frame_size / 2.0;
    CanvasTransform::from_translate(half, half)
        .pre_concat(CanvasTransform::from_rotate(f32::from(
            transform.rotation.degrees(),
        )))
        .pre_scale(transform.scale, transform.scale)
        .pre_translate(transform.offset.x, transform.offset.y)
        .pre_translate(-(image.width() as f32) / 2.0, -(image.height() as f32) / 2.0)
}

/// Two vertical and two horizontal guides at thirds of the frame.
fn draw_guides(target: &mut Pixmap, clip: Option<&Mask>) {
    let Some(path) = guides_path(target.width() as f32) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba(1.0, 1.0, 1.0, GRID_LINE_ALPHA).unwrap_or(Color::WHITE));
    paint.anti_alias = true;

    let stroke = Stroke {
        width: GRID_LINE_WIDTH,
        ..Stroke::default()
    };
    target.stroke_path(&path, &paint, &stroke, CanvasTransform::identity(), clip);
}

fn guides_path(size: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for third in [size / 3.0, size * 2.0 / 3.0] {
        pb.move_to(third, 0.0);
        pb.line_to(third, size);
        pb.move_to(0.0, third);
        pb.line_to(size, third);
    }
    pb.finish()
}

/// Coverage mask of the rounded preview frame, `None` for square corners.
fn rounded_clip(frame_size: u32, border_radius: BorderRadius) -> Option<Mask> {
    let size = frame_size as f32;
    let radius = border_radius.pixels(size).min(size / 2.0);
    if radius <= 0.0 {
        return None;
    }

    let path = rounded_square(size, radius)?;
    let mut mask = Mask::new(frame_size, frame_size)?;
    mask.fill_path(&path, FillRule::Winding, true, CanvasTransform::identity());
    Some(mask)
}

fn rounded_square(size: f32, r: f32) -> Option<Path> {
    let k = r * KAPPA;
    let far = size - r;
    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(far, 0.0);
    pb.cubic_to(far + k, 0.0, size, r - k, size, r);
    pb.line_to(size, far);
    pb.cubic_to(size, far + k, far + k, size, far, size);
    pb.line_to(r, size);
    pb.cubic_to(r - k, size, 0.0, far + k, 0.0, far);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - k, r - k, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::DataUrl;
    use crate::test_utils::two_tone_raster;
    use crate::ui::avatar_editor::state::{Constraints, TransformState};
    use crate::ui::state::RotationDirection;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).expect("in bounds").demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    fn is_red(px: [u8; 4]) -> bool {
        px[0] > 240 && px[2] < 16 && px[3] == 255
    }

    fn is_blue(px: [u8; 4]) -> bool {
        px[2] > 240 && px[0] < 16 && px[3] == 255
    }

    fn decode(url: &str) -> image_rs::RgbaImage {
        let data = DataUrl::parse(url).expect("data url");
        image_rs::load_from_memory(&data.bytes)
            .expect("decode export")
            .to_rgba8()
    }

    #[test]
    fn border_radius_is_clamped() {
        assert_eq!(BorderRadius::new(80.0).value(), 50.0);
        assert_eq!(BorderRadius::new(-5.0).value(), 0.0);
        assert_eq!(BorderRadius::new(25.0).pixels(200.0), 50.0);
    }

    #[test]
    fn zero_sized_frame_is_a_no_op() {
        let image = two_tone_raster(40, 40);
        let state = TransformState::new(Constraints::new(40, 40, 0), 0.2);
        let mut renderer = Renderer::new(0, BorderRadius::default());

        assert!(renderer.draw_preview(&image, &state.transform()).is_none());
        assert!(export_clean(
            &image,
            &state.transform(),
            0,
            ExportFormat::Png,
            Quality::default()
        )
        .is_none());
    }

    #[test]
    fn preview_is_clipped_to_circle() {
        let image = two_tone_raster(100, 100);
        let state = TransformState::new(Constraints::new(100, 100, 60), 0.2);
        let mut renderer = Renderer::new(60, BorderRadius::new(50.0));

        let preview = renderer
            .draw_preview(&image, &state.transform())
            .expect("surface");
        assert_eq!(pixel(preview, 0, 0)[3], 0, "corner is outside the circle");
        assert_eq!(pixel(preview, 10, 25)[3], 255);
    }

    #[test]
    fn preview_has_guides_but_export_does_not() {
        let image = two_tone_raster(90, 90);
        let state = TransformState::new(Constraints::new(90, 90, 90), 0.2);
        let mut renderer = Renderer::new(90, BorderRadius::new(0.0));

        let preview = renderer
            .draw_preview(&image, &state.transform())
            .expect("surface");
        // Left half is pure red; a guide line lightens it.
        let on_guide = pixel(preview, 30, 10);
        assert!(on_guide[1] > 0, "guide should tint the preview: {on_guide:?}");

        let url = export_clean(
            &image,
            &state.transform(),
            90,
            ExportFormat::Png,
            Quality::default(),
        )
        .expect("export");
        let exported = decode(&url);
        assert!(is_red(exported.get_pixel(30, 10).0));
    }

    #[test]
    fn export_is_exactly_frame_sized_and_opaque() {
        let image = two_tone_raster(500, 1500);
        let mut state = TransformState::new(Constraints::new(500, 1500, 300), 0.2);
        state.set_scale(1.7);
        state.rotate(RotationDirection::Clockwise);

        let url = export_clean(
            &image,
            &state.transform(),
            300,
            ExportFormat::Png,
            Quality::default(),
        )
        .expect("export");
        let exported = decode(&url);
        assert_eq!(exported.dimensions(), (300, 300));
        for (x, y) in [(0, 0), (299, 0), (0, 299), (299, 299), (150, 150)] {
            assert_eq!(exported.get_pixel(x, y).0[3], 255, "gap at ({x}, {y})");
        }
    }

    #[test]
    fn rotation_moves_image_halves() {
        let image = two_tone_raster(100, 100);
        let mut state = TransformState::new(Constraints::new(100, 100, 100), 0.2);

        let upright = decode(
            &export_clean(&image, &state.transform(), 100, ExportFormat::Png, Quality::default())
                .expect("export"),
        );
        assert!(is_red(upright.get_pixel(10, 50).0));

        state.rotate(RotationDirection::Clockwise);
        let turned = decode(
            &export_clean(&image, &state.transform(), 100, ExportFormat::Png, Quality::default())
                .expect("export"),
        );
        // Clockwise: the left (red) half ends up on top.
        assert!(is_red(turned.get_pixel(50, 10).0));
        assert!(is_blue(turned.get_pixel(50, 90).0));
    }

    #[test]
    fn repeated_export_is_identical() {
        let image = two_tone_raster(64, 48);
        let mut state = TransformState::new(Constraints::new(64, 48, 32), 0.2);
        state.set_scale(1.3);
        state.set_offset(iced::Vector::new(5.0, -3.0));

        let first = export_clean(&image, &state.transform(), 32, ExportFormat::Png, Quality::default());
        let second = export_clean(&image, &state.transform(), 32, ExportFormat::Png, Quality::default());
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn clear_wipes_preview() {
        let image = two_tone_raster(40, 40);
        let state = TransformState::new(Constraints::new(40, 40, 40), 0.2);
        let mut renderer = Renderer::new(40, BorderRadius::new(0.0));
        renderer.draw_preview(&image, &state.transform());

        renderer.clear();
        let surface = renderer.surface().expect("surface");
        assert!(surface.pixels().iter().all(|px| px.alpha() == 0));
    }
}
