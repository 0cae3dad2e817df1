// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Grab-and-drag state for panning the avatar inside its frame.

use iced::{Point, Vector};

/// Pointer gesture state over the avatar frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// A pan is in progress, anchored where the pointer went down.
    ///
    /// `anchor_position` is `None` when the press arrived before any cursor
    /// position was known; the next move fills it in.
    Dragging {
        anchor_position: Option<Point>,
        anchor_offset: Vector,
    },
}

impl PointerState {
    /// Starts a drag with the current pan `offset`, anchored at `position`
    /// when known.
    pub fn start(&mut self, position: Option<Point>, offset: Vector) {
        *self = PointerState::Dragging {
            anchor_position: position,
            anchor_offset: offset,
        };
    }

    /// Fills a pending anchor with `position`. Returns `true` if the anchor
    /// was pending, in which case this move carries no delta.
    pub fn settle_anchor(&mut self, position: Point) -> bool {
        match self {
            PointerState::Dragging {
                anchor_position: anchor @ None,
                ..
            } => {
                *anchor = Some(position);
                true
            }
            _ => false,
        }
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        *self = PointerState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerState::Dragging { .. })
    }

    /// Returns the anchor offset and the screen-space pointer delta since
    /// the drag started, or `None` when idle or still unanchored.
    #[must_use]
    pub fn delta(&self, current_position: Point) -> Option<(Vector, Vector)> {
        match *self {
            PointerState::Dragging {
                anchor_position: Some(anchor_position),
                anchor_offset,
            } => Some((anchor_offset, current_position - anchor_position)),
            _ => None,
        }
    }
}
