// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the editor plus a status line.

use super::{Message, Status};
use crate::i18n::fluent::I18n;
use crate::ui::avatar_editor::{State as AvatarEditorState, ViewContext as EditorViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a AvatarEditorState,
    pub status: Status,
    pub output_path: &'a std::path::Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let editor = ctx
        .editor
        .view(EditorViewContext { i18n: ctx.i18n })
        .map(Message::Editor);

    let mut status_line = ctx.i18n.tr(ctx.status.i18n_key());
    if ctx.status == Status::Saved {
        status_line = format!("{status_line}: {}", ctx.output_path.display());
    }
    let status_bar = container(text(status_line).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::editor::status_bar);

    Column::new()
        .push(
            container(editor)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        )
        .push(status_bar)
        .into()
}
