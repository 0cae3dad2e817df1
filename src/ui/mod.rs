// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The editor follows the Elm-style "state down, messages up" pattern.
//!
//! - [`avatar_editor`] - Crop, pan, zoom and rotate an avatar inside a square frame
//! - [`state`] - Reusable state primitives (rotation, pointer drag)
//! - [`styles`] - Centralized container styles
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)

pub mod avatar_editor;
pub mod design_tokens;
pub mod state;
pub mod styles;
