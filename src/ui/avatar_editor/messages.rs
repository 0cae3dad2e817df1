// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use super::state::LoadTicket;
use crate::error::Error;
use crate::media::RasterImage;
use iced::Point;

/// Toolbar button and slider messages.
#[derive(Debug, Clone)]
pub enum ControlMessage {
    ZoomIn,
    ZoomOut,
    /// Scale slider moved.
    ScaleChanged(f32),
    RotateClockwise,
    RotateCounterClockwise,
    Save,
    Discard,
}

/// Pointer interaction over the avatar frame.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    /// Cursor moved over the frame (position relative to the frame).
    CursorMoved { position: Point },
    PointerPressed,
    PointerReleased,
    /// Cursor left the frame.
    CursorLeft,
}

/// Messages emitted directly by the editor widgets or sent back by the host.
#[derive(Debug, Clone)]
pub enum Message {
    Control(ControlMessage),
    Canvas(CanvasMessage),
    /// An asynchronous load finished.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<RasterImage, Error>,
    },
    /// The host's save future settled.
    SaveFinished(Result<(), String>),
}

impl From<ControlMessage> for Message {
    fn from(message: ControlMessage) -> Self {
        Message::Control(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The frame was clicked while empty: open the file picker.
    PickFileRequested,
    /// The avatar changed; carries the freshly exported data URL.
    Changed(String),
    /// Persist this data URL, then answer with [`Message::SaveFinished`].
    SaveRequested(String),
    /// The image was discarded.
    Discarded,
    /// The current load failed; carries the error's i18n key.
    LoadFailed(&'static str),
}
