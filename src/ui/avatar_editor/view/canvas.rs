// SPDX-License-Identifier: MPL-2.0
//! Avatar frame: live preview when an image is loaded, upload target
//! otherwise.

use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, mouse_area, text};
use iced::{mouse, Element, Length};

use super::super::{CanvasMessage, Message, State, ViewContext};

pub struct CanvasModel<'a> {
    pub preview: Option<&'a image::Handle>,
    pub frame_size: f32,
    pub is_dragging: bool,
}

impl<'a> CanvasModel<'a> {
    pub fn from_state(state: &'a State) -> Self {
        Self {
            preview: state.preview(),
            frame_size: state.options().size as f32,
            is_dragging: state.pointer().is_dragging(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let size = Length::Fixed(model.frame_size);

    let Some(handle) = model.preview else {
        let placeholder = container(
            text(ctx.i18n.tr("avatar-editor-placeholder")).size(typography::BODY),
        )
        .width(size)
        .height(size)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::editor::empty_frame);

        return mouse_area(placeholder)
            .on_press(Message::Canvas(CanvasMessage::PointerPressed))
            .interaction(mouse::Interaction::Pointer)
            .into();
    };

    let interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(image(handle.clone()).width(size).height(size))
        .on_press(Message::Canvas(CanvasMessage::PointerPressed))
        .on_release(Message::Canvas(CanvasMessage::PointerReleased))
        .on_exit(Message::Canvas(CanvasMessage::CursorLeft))
        .on_move(|position| Message::Canvas(CanvasMessage::CursorMoved { position }))
        .interaction(interaction)
        .into()
}
