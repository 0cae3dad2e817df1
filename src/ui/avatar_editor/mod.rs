// SPDX-License-Identifier: MPL-2.0
//! Avatar editor: crop, pan, zoom and rotate an image inside a square frame.
//!
//! This module follows a "state down, messages up" pattern. The editor owns
//! the loaded image, its transform and the preview surface; the parent
//! application performs loading and saving asynchronously and feeds results
//! back as messages.

use crate::media::{AllowedTypes, ExportFormat, Quality, RasterImage};
use crate::ui::state::PointerState;

mod component;
mod messages;
pub mod render;
pub mod state;
mod view;

pub use self::render::{BorderRadius, Renderer};
pub use self::state::{
    Constraints, EditSession, ImageOrigin, LoadTicket, RenderTrigger, Transform, TransformState,
};
pub use component::ViewContext;
pub use messages::{CanvasMessage, ControlMessage, Event, Message};

/// Host-facing configuration of the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarEditorOptions {
    /// Side length of the square frame and of the exported raster.
    pub size: u32,
    /// Cosmetic preview rounding; never affects exported pixels.
    pub border_radius: BorderRadius,
    pub quality: Quality,
    pub export_format: ExportFormat,
    /// MIME types accepted from the file picker.
    pub allowed_types: AllowedTypes,
    /// Scale increment of the zoom buttons.
    pub zoom_step: f32,
}

impl Default for AvatarEditorOptions {
    fn default() -> Self {
        Self {
            size: crate::config::DEFAULT_FRAME_SIZE,
            border_radius: BorderRadius::default(),
            quality: Quality::default(),
            export_format: ExportFormat::default(),
            allowed_types: AllowedTypes::default(),
            zoom_step: crate::config::DEFAULT_ZOOM_STEP,
        }
    }
}

/// Image currently in the editor together with its transform.
#[derive(Debug, Clone)]
pub(crate) struct LoadedImage {
    pub image: RasterImage,
    pub transform: TransformState,
}

/// Local UI state for the avatar editor.
#[derive(Debug, Clone)]
pub struct State {
    options: AvatarEditorOptions,
    /// `None` until a load completes, and again after discard.
    loaded: Option<LoadedImage>,
    session: EditSession,
    renderer: Renderer,
    /// Display copy of the last preview draw.
    preview: Option<iced::widget::image::Handle>,
    pointer: PointerState,
    /// Last cursor position over the frame.
    cursor_position: Option<iced::Point>,
    /// Bumped on every load request and discard; older results are stale.
    load_generation: u64,
    /// Whether the host's save future is pending.
    saving: bool,
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Control(msg) => self.handle_control_message(msg),
            Message::Canvas(msg) => self.handle_canvas_message(msg),
            Message::ImageLoaded { ticket, result } => self.handle_image_loaded(ticket, result),
            Message::SaveFinished(result) => self.handle_save_finished(result),
        }
    }

    pub fn options(&self) -> &AvatarEditorOptions {
        &self.options
    }

    pub fn has_image(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.loaded.as_ref().map(|loaded| &loaded.image)
    }

    /// Current transform, if an image is loaded.
    pub fn transform(&self) -> Option<Transform> {
        self.loaded.as_ref().map(|loaded| loaded.transform.transform())
    }

    pub fn transform_state(&self) -> Option<&TransformState> {
        self.loaded.as_ref().map(|loaded| &loaded.transform)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn preview(&self) -> Option<&iced::widget::image::Handle> {
        self.preview.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn can_save(&self) -> bool {
        self.has_image() && !self.saving
    }

    pub fn can_discard(&self) -> bool {
        self.has_image() && !self.saving
    }

    pub fn can_zoom_in(&self) -> bool {
        self.transform_state().is_some_and(TransformState::can_zoom_in)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.transform_state().is_some_and(TransformState::can_zoom_out)
    }
}
