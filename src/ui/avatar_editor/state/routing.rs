// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use super::{Constraints, EditSession, LoadTicket, RenderTrigger, TransformState};
use crate::error::Error;
use crate::media::RasterImage;
use crate::ui::avatar_editor::{CanvasMessage, ControlMessage, Event, LoadedImage, State};
use crate::ui::state::RotationDirection;
use iced::Point;

impl State {
    pub(crate) fn handle_control_message(&mut self, message: ControlMessage) -> Event {
        match message {
            ControlMessage::ZoomIn => self.edit(|transform| {
                transform.zoom_in();
            }),
            ControlMessage::ZoomOut => self.edit(|transform| {
                transform.zoom_out();
            }),
            ControlMessage::ScaleChanged(scale) => self.edit(|transform| {
                transform.set_scale(scale);
            }),
            ControlMessage::RotateClockwise => self.edit(|transform| {
                transform.rotate(RotationDirection::Clockwise);
            }),
            ControlMessage::RotateCounterClockwise => self.edit(|transform| {
                transform.rotate(RotationDirection::CounterClockwise);
            }),
            ControlMessage::Save => self.request_save(),
            ControlMessage::Discard => self.discard(),
        }
    }

    pub(crate) fn handle_canvas_message(&mut self, message: CanvasMessage) -> Event {
        match message {
            CanvasMessage::CursorMoved { position } => {
                self.cursor_position = Some(position);
                self.handle_pointer_moved(position)
            }
            CanvasMessage::PointerPressed => self.handle_pointer_pressed(),
            CanvasMessage::PointerReleased => {
                self.pointer.stop();
                Event::None
            }
            CanvasMessage::CursorLeft => {
                self.cursor_position = None;
                self.pointer.stop();
                Event::None
            }
        }
    }

    /// Empty frame: ask the host for a file. Loaded image: anchor a pan.
    fn handle_pointer_pressed(&mut self) -> Event {
        let Some(loaded) = self.loaded.as_ref() else {
            return Event::PickFileRequested;
        };
        self.pointer.start(self.cursor_position, loaded.transform.offset());
        Event::None
    }

    fn handle_pointer_moved(&mut self, position: Point) -> Event {
        if self.pointer.settle_anchor(position) {
            return Event::None;
        }
        let Some((anchor_offset, delta)) = self.pointer.delta(position) else {
            return Event::None;
        };
        self.edit(|transform| {
            // Screen deltas are undone through the rotation so the image
            // follows the pointer whatever the quarter turn.
            let image_delta = transform.rotation().unrotate(delta) * (1.0 / transform.scale());
            transform.set_offset(anchor_offset + image_delta);
        })
    }

    /// Applies an edit to the loaded transform, then redraws and notifies.
    fn edit(&mut self, apply: impl FnOnce(&mut TransformState)) -> Event {
        let Some(loaded) = self.loaded.as_mut() else {
            return Event::None;
        };
        apply(&mut loaded.transform);
        self.session.mark_edited();
        self.render(RenderTrigger::Edit)
    }

    pub(crate) fn handle_image_loaded(
        &mut self,
        ticket: LoadTicket,
        result: Result<RasterImage, Error>,
    ) -> Event {
        if ticket.generation != self.load_generation {
            tracing::debug!(
                "Ignoring stale image load (generation {} != {})",
                ticket.generation,
                self.load_generation
            );
            return Event::None;
        }

        let image = match result {
            Ok(image) => image,
            Err(err) if err.is_validation() => {
                tracing::warn!("Rejected avatar image: {err}");
                return Event::LoadFailed(err.i18n_key());
            }
            Err(err) => {
                tracing::error!("Failed to load avatar image: {err}");
                return Event::LoadFailed(err.i18n_key());
            }
        };

        let constraints = Constraints::new(image.width(), image.height(), self.options.size);
        match self.loaded.as_mut() {
            Some(loaded) => {
                loaded.image = image;
                loaded.transform.reload(constraints);
            }
            None => {
                self.loaded = Some(LoadedImage {
                    image,
                    transform: TransformState::new(constraints, self.options.zoom_step),
                });
            }
        }
        self.session = EditSession::loaded(ticket.origin);
        self.pointer.stop();
        self.render(RenderTrigger::InitialLoad)
    }

    /// Redraws the preview and exports a notification when the session
    /// allows one for `trigger`.
    pub(crate) fn render(&mut self, trigger: RenderTrigger) -> Event {
        self.refresh_preview();
        if !self.session.should_notify(trigger) {
            return Event::None;
        }
        match self.export() {
            Some(data_url) => {
                tracing::debug!("Avatar changed ({trigger:?})");
                Event::Changed(data_url)
            }
            None => Event::None,
        }
    }
}
