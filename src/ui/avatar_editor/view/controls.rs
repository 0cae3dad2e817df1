// SPDX-License-Identifier: MPL-2.0
//! Zoom, rotate and save/discard controls under the frame.

use crate::config::SCALE_SLIDER_STEP;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, slider, text, Column, Row, Text};
use iced::{Alignment, Element, Length};

use super::super::{ControlMessage, Message, State, ViewContext};

pub struct ControlsModel {
    pub scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub can_save: bool,
    pub can_discard: bool,
    pub is_saving: bool,
}

impl ControlsModel {
    /// `None` while the frame is empty.
    pub fn from_state(state: &State) -> Option<Self> {
        let transform = state.transform_state()?;
        Some(Self {
            scale: transform.scale(),
            min_scale: transform.constraints().min_scale(),
            max_scale: transform.constraints().max_scale(),
            can_zoom_in: state.can_zoom_in(),
            can_zoom_out: state.can_zoom_out(),
            can_save: state.can_save(),
            can_discard: state.can_discard(),
            is_saving: state.is_saving(),
        })
    }
}

fn control_button<'a>(label: String, message: Option<ControlMessage>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(message.map(Message::Control))
        .into()
}

pub fn view<'a>(model: ControlsModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tr = |key: &str| ctx.i18n.tr(key);

    let zoom_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(control_button(
            tr("avatar-editor-zoom-out"),
            model.can_zoom_out.then_some(ControlMessage::ZoomOut),
        ))
        .push(
            slider(model.min_scale..=model.max_scale, model.scale, |scale| {
                Message::Control(ControlMessage::ScaleChanged(scale))
            })
            .step(SCALE_SLIDER_STEP)
            .width(Length::Fixed(sizing::SLIDER_WIDTH)),
        )
        .push(control_button(
            tr("avatar-editor-zoom-in"),
            model.can_zoom_in.then_some(ControlMessage::ZoomIn),
        ));

    let rotate_row = Row::new()
        .spacing(spacing::XS)
        .push(control_button(
            tr("avatar-editor-rotate-ccw"),
            Some(ControlMessage::RotateCounterClockwise),
        ))
        .push(control_button(
            tr("avatar-editor-rotate-cw"),
            Some(ControlMessage::RotateClockwise),
        ));

    let save_label = if model.is_saving {
        tr("avatar-editor-saving")
    } else {
        tr("avatar-editor-save")
    };
    let action_row = Row::new()
        .spacing(spacing::XS)
        .push(control_button(
            tr("avatar-editor-discard"),
            model.can_discard.then_some(ControlMessage::Discard),
        ))
        .push(control_button(
            save_label,
            model.can_save.then_some(ControlMessage::Save),
        ));

    let scale_caption = text(format!("{} {:.2}×", tr("avatar-editor-scale-label"), model.scale))
        .size(typography::CAPTION);

    container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .push(zoom_row)
            .push(scale_caption)
            .push(rotate_row)
            .push(action_row),
    )
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}
