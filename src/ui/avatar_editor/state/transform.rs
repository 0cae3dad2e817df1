// SPDX-License-Identifier: MPL-2.0
//! Viewport transform of the avatar inside its square frame.
//!
//! Every setter returns the constrained value; no caller ever observes a
//! transform that leaves a gap inside the frame.

use crate::config::MAX_SCALE;
use crate::ui::state::{RotationAngle, RotationDirection};
use iced::Vector;

/// Scale, quarter-turn rotation and pan offset.
///
/// `offset` is measured in unscaled image pixels, so re-deriving pixel
/// bounds after a scale change only depends on the current values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub rotation: RotationAngle,
    pub offset: Vector,
}

/// Geometry that bounds the transform for one loaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    frame_size: f32,
    image_width: f32,
    image_height: f32,
    min_scale: f32,
}

impl Constraints {
    pub fn new(image_width: u32, image_height: u32, frame_size: u32) -> Self {
        let frame_size = frame_size as f32;
        let image_width = image_width.max(1) as f32;
        let image_height = image_height.max(1) as f32;
        Self {
            frame_size,
            image_width,
            image_height,
            min_scale: min_scale(image_width, image_height, frame_size),
        }
    }

    #[must_use]
    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    /// Upper scale bound. Images smaller than the frame may need more than
    /// [`MAX_SCALE`] just to cover it; coverage wins.
    #[must_use]
    pub fn max_scale(&self) -> f32 {
        MAX_SCALE.max(self.min_scale)
    }

    #[must_use]
    pub fn clamp_scale(&self, requested: f32) -> f32 {
        if requested.is_nan() {
            return self.min_scale;
        }
        requested.clamp(self.min_scale, self.max_scale())
    }

    /// Largest pan, per axis, that still keeps the frame covered at `scale`.
    #[must_use]
    pub fn max_offset(&self, scale: f32) -> Vector {
        if scale <= 0.0 {
            return Vector::ZERO;
        }
        let axis = |extent: f32| ((extent * scale - self.frame_size) / (2.0 * scale)).max(0.0);
        Vector::new(axis(self.image_width), axis(self.image_height))
    }

    #[must_use]
    pub fn clamp_offset(&self, requested: Vector, scale: f32) -> Vector {
        let max = self.max_offset(scale);
        let clamp = |v: f32, limit: f32| {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(-limit, limit)
            }
        };
        Vector::new(clamp(requested.x, max.x), clamp(requested.y, max.y))
    }

    /// Centered, frame-filling transform.
    #[must_use]
    pub fn initial_transform(&self) -> Transform {
        Transform {
            scale: self.min_scale,
            rotation: RotationAngle::ZERO,
            offset: Vector::ZERO,
        }
    }
}

/// Smallest scale at which the image still covers the square frame.
fn min_scale(image_width: f32, image_height: f32, frame_size: f32) -> f32 {
    if image_width > image_height {
        frame_size / image_height
    } else {
        frame_size / image_width
    }
}

/// Transform together with the constraints of the loaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    constraints: Constraints,
    transform: Transform,
    zoom_step: f32,
}

impl TransformState {
    pub fn new(constraints: Constraints, zoom_step: f32) -> Self {
        Self {
            transform: constraints.initial_transform(),
            constraints,
            zoom_step,
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    #[must_use]
    pub fn rotation(&self) -> RotationAngle {
        self.transform.rotation
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.transform.offset
    }

    /// Clamps `requested` into the scale bounds, then re-clamps the offset
    /// for the new scale.
    pub fn set_scale(&mut self, requested: f32) -> f32 {
        let scale = self.constraints.clamp_scale(requested);
        self.transform.scale = scale;
        self.transform.offset = self.constraints.clamp_offset(self.transform.offset, scale);
        scale
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_scale(self.transform.scale + self.zoom_step)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_scale(self.transform.scale - self.zoom_step)
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.transform.scale < self.constraints.max_scale()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.transform.scale > self.constraints.min_scale()
    }

    /// Quarter-turn rotation. Offset containment does not depend on the
    /// angle, so nothing else changes.
    pub fn rotate(&mut self, direction: RotationDirection) -> RotationAngle {
        self.transform.rotation = self.transform.rotation.rotate(direction);
        self.transform.rotation
    }

    /// Clamps `requested` against the current scale.
    pub fn set_offset(&mut self, requested: Vector) -> Vector {
        let offset = self
            .constraints
            .clamp_offset(requested, self.transform.scale);
        self.transform.offset = offset;
        offset
    }

    pub fn reset(&mut self) {
        self.transform = self.constraints.initial_transform();
    }

    /// Swaps in the bounds of a newly loaded image and starts over from its
    /// initial transform.
    pub fn reload(&mut self, constraints: Constraints) {
        self.constraints = constraints;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn tall_image_state() -> TransformState {
        TransformState::new(Constraints::new(500, 1500, 300), 0.2)
    }

    fn assert_contained(state: &TransformState) {
        let t = state.transform();
        let max = state.constraints().max_offset(t.scale);
        assert!(t.offset.x.abs() <= max.x, "x {} > {}", t.offset.x, max.x);
        assert!(t.offset.y.abs() <= max.y, "y {} > {}", t.offset.y, max.y);
        assert!(t.scale >= state.constraints().min_scale());
        assert!(t.scale <= state.constraints().max_scale());
    }

    #[test]
    fn min_scale_uses_shorter_side() {
        assert_abs_diff_eq!(Constraints::new(500, 1500, 300).min_scale(), 0.6);
        assert_abs_diff_eq!(Constraints::new(1200, 600, 300).min_scale(), 0.5);
        assert_abs_diff_eq!(Constraints::new(600, 600, 300).min_scale(), 0.5);
    }

    #[test]
    fn initial_transform_is_centered_and_filling() {
        let state = tall_image_state();
        let t = state.transform();
        assert_abs_diff_eq!(t.scale, 0.6);
        assert_eq!(t.rotation, RotationAngle::ZERO);
        assert_eq!(t.offset, Vector::ZERO);
    }

    #[test]
    fn zoom_in_saturates_at_max_scale() {
        let mut state = tall_image_state();
        assert!(!state.can_zoom_out());
        for _ in 0..20 {
            state.zoom_in();
            assert_contained(&state);
        }
        assert_eq!(state.scale(), 3.0);
        assert!(!state.can_zoom_in());
        assert!(state.can_zoom_out());
    }

    #[test]
    fn zoom_out_saturates_at_min_scale() {
        let mut state = tall_image_state();
        state.set_scale(2.0);
        for _ in 0..20 {
            state.zoom_out();
            assert_contained(&state);
        }
        assert_eq!(state.scale(), state.constraints().min_scale());
    }

    #[test]
    fn max_offset_matches_covered_extent() {
        let c = Constraints::new(500, 1500, 300);
        let at_min = c.max_offset(0.6);
        assert_abs_diff_eq!(at_min.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(at_min.y, 500.0, epsilon = 1e-3);

        let at_two = c.max_offset(2.0);
        assert_abs_diff_eq!(at_two.x, 175.0);
        assert_abs_diff_eq!(at_two.y, 675.0);
    }

    #[test]
    fn set_offset_clamps_each_axis() {
        let mut state = tall_image_state();
        let applied = state.set_offset(Vector::new(40.0, -9000.0));
        assert_abs_diff_eq!(applied.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(applied.y, -500.0, epsilon = 1e-3);
        assert_contained(&state);
    }

    #[test]
    fn zooming_out_shrinks_offset() {
        let mut state = tall_image_state();
        state.set_scale(3.0);
        state.set_offset(Vector::new(1000.0, 1000.0));
        let before = state.offset();

        state.set_scale(1.0);
        let after = state.offset();
        assert!(after.x <= before.x);
        assert!(after.y <= before.y);
        assert_contained(&state);
    }

    #[test]
    fn rotation_keeps_scale_and_offset() {
        let mut state = tall_image_state();
        state.set_scale(1.5);
        state.set_offset(Vector::new(30.0, -60.0));
        let before = state.transform();

        state.rotate(RotationDirection::Clockwise);
        let after = state.transform();
        assert_eq!(after.scale, before.scale);
        assert_eq!(after.offset, before.offset);
        assert_eq!(after.rotation.degrees(), 90);
        assert_contained(&state);
    }

    #[test]
    fn reset_restores_initial_transform() {
        let mut state = tall_image_state();
        state.set_scale(2.5);
        state.set_offset(Vector::new(10.0, 10.0));
        state.rotate(RotationDirection::CounterClockwise);

        state.reset();
        assert_eq!(state.transform(), state.constraints().initial_transform());
    }

    #[test]
    fn reload_adopts_new_bounds() {
        let mut state = tall_image_state();
        state.set_scale(2.0);
        state.rotate(RotationDirection::Clockwise);

        state.reload(Constraints::new(1200, 600, 300));
        assert_abs_diff_eq!(state.scale(), 0.5);
        assert_eq!(state.rotation(), RotationAngle::ZERO);
        assert_eq!(state.offset(), Vector::ZERO);
        assert!(state.can_zoom_in());
    }

    #[test]
    fn tiny_image_may_exceed_max_scale() {
        let c = Constraints::new(50, 80, 300);
        assert_abs_diff_eq!(c.min_scale(), 6.0);
        assert_eq!(c.max_scale(), 6.0);
        assert_eq!(c.clamp_scale(3.0), 6.0);
    }

    #[test]
    fn nan_requests_are_neutralized() {
        let mut state = tall_image_state();
        assert_eq!(state.set_scale(f32::NAN), state.constraints().min_scale());
        assert_eq!(state.set_offset(Vector::new(f32::NAN, f32::NAN)), Vector::ZERO);
    }
}
