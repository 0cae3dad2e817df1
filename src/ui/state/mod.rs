// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small, widget-independent state machines shared by the editor.

pub mod drag;
pub mod rotation;

pub use drag::PointerState;
pub use rotation::{RotationAngle, RotationDirection};
