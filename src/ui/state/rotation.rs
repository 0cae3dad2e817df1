// SPDX-License-Identifier: MPL-2.0
//! Rotation angle domain type for the avatar frame.
//!
//! Only quarter turns exist: the coverage constraints assume the rotated
//! image stays axis-aligned with the square frame.

use iced::Vector;

/// Direction of a quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Rotation angle in 90° increments.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always one of: 0°, 90°, 180°, or 270°.
///
/// # Example
///
/// ```
/// use iced_avatar::ui::state::{RotationAngle, RotationDirection};
///
/// let angle = RotationAngle::default().rotate(RotationDirection::Clockwise);
/// assert_eq!(angle.degrees(), 90);
///
/// let back = angle.rotate(RotationDirection::CounterClockwise);
/// assert_eq!(back, RotationAngle::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, rounding down to a quarter turn and
    /// wrapping into 0–270°.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    /// Adds or subtracts 90°, wrapping into `[0, 360)`.
    #[must_use]
    pub fn rotate(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => Self((self.0 + 90) % 360),
            RotationDirection::CounterClockwise => Self((self.0 + 270) % 360),
        }
    }

    /// Maps a screen-space vector into the rotated image's axes.
    ///
    /// Exact for quarter turns, so no rounding error creeps into drag math.
    #[must_use]
    pub fn unrotate(self, v: Vector) -> Vector {
        match self.0 {
            90 => Vector::new(v.y, -v.x),
            180 => Vector::new(-v.x, -v.y),
            270 => Vector::new(-v.y, v.x),
            _ => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RotationDirection::{Clockwise, CounterClockwise};

    #[test]
    fn new_normalizes_to_90_increments() {
        assert_eq!(RotationAngle::new(45).degrees(), 0);
        assert_eq!(RotationAngle::new(135).degrees(), 90);
        assert_eq!(RotationAngle::new(270).degrees(), 270);
        assert_eq!(RotationAngle::new(450).degrees(), 90);
    }

    #[test]
    fn clockwise_wraps_at_360() {
        assert_eq!(RotationAngle::new(270).rotate(Clockwise), RotationAngle::ZERO);
    }

    #[test]
    fn counterclockwise_wraps_at_0() {
        assert_eq!(RotationAngle::ZERO.rotate(CounterClockwise).degrees(), 270);
    }

    #[test]
    fn four_quarter_turns_return_to_start() {
        for start in [0, 90, 180, 270] {
            let angle = RotationAngle::new(start);
            let cw = (0..4).fold(angle, |a, _| a.rotate(Clockwise));
            let ccw = (0..4).fold(angle, |a, _| a.rotate(CounterClockwise));
            assert_eq!(cw, angle);
            assert_eq!(ccw, angle);
        }
    }

    #[test]
    fn counterclockwise_inverts_clockwise() {
        for start in [0, 90, 180, 270] {
            let angle = RotationAngle::new(start);
            assert_eq!(angle.rotate(Clockwise).rotate(CounterClockwise), angle);
        }
    }

    #[test]
    fn radians_conversion() {
        use std::f32::consts::PI;
        assert!((RotationAngle::new(90).radians() - PI / 2.0).abs() < 0.001);
        assert!((RotationAngle::new(180).radians() - PI).abs() < 0.001);
    }

    #[test]
    fn unrotate_undoes_screen_rotation() {
        let right = Vector::new(10.0, 0.0);
        assert_eq!(RotationAngle::ZERO.unrotate(right), right);
        // Image rotated 90° clockwise: screen-right is the image's up.
        assert_eq!(RotationAngle::new(90).unrotate(right), Vector::new(0.0, -10.0));
        assert_eq!(RotationAngle::new(180).unrotate(right), Vector::new(-10.0, 0.0));
        assert_eq!(RotationAngle::new(270).unrotate(right), Vector::new(0.0, 10.0));
    }
}
