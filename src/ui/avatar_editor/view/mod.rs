// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod canvas;
pub mod controls;

use crate::ui::design_tokens::spacing;
use iced::widget::{container, Column};
use iced::{Alignment, Element, Length};

use super::{Message, State, ViewContext};
use canvas::CanvasModel;
use controls::ControlsModel;

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let canvas = canvas::view(CanvasModel::from_state(state), &ctx);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(canvas);

    if let Some(model) = ControlsModel::from_state(state) {
        content = content.push(controls::view(model, &ctx));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
