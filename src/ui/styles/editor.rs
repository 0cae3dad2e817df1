// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for editor surfaces.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Empty avatar frame inviting a click to upload.
pub fn empty_frame(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(palette_ext.background.base.text),
        ..Default::default()
    }
}

/// Bottom status bar of the host window.
///
/// Follows the theme background so it stays subtle in light and dark modes.
pub fn status_bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
