// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the editor. Constants are organized by category.
//!
//! # Categories
//!
//! - **Frame**: Square output frame size and cosmetic corner rounding
//! - **Scale**: Zoom bounds and step
//! - **Export**: Output quality and accepted input types
//! - **Overlay**: Rule-of-thirds guide appearance

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Default side length of the square avatar frame, in pixels.
pub const DEFAULT_FRAME_SIZE: u32 = 300;

/// Default preview corner radius, in percent of the frame (50% = circle).
pub const DEFAULT_BORDER_RADIUS_PERCENT: f32 = 50.0;

/// Largest meaningful corner radius percentage.
pub const MAX_BORDER_RADIUS_PERCENT: f32 = 50.0;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Upper bound for the image-to-frame scale factor.
pub const MAX_SCALE: f32 = 3.0;

/// Scale increment applied by the zoom buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Smallest accepted zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Largest accepted zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

/// Granularity of the scale slider.
pub const SCALE_SLIDER_STEP: f32 = 0.01;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default quality forwarded to raster serialization (0.0 to 1.0).
pub const DEFAULT_QUALITY: f32 = 0.9;

/// MIME types accepted from the file picker by default.
pub const DEFAULT_ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Opacity of the rule-of-thirds guide lines.
pub const GRID_LINE_ALPHA: f32 = 0.5;

/// Stroke width of the guide lines, in pixels.
pub const GRID_LINE_WIDTH: f32 = 1.0;
