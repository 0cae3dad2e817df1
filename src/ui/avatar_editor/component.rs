// SPDX-License-Identifier: MPL-2.0
//! Public-facing view helpers and constructor for the editor facade.

use crate::media::export::demultiplied_rgba;
use iced::widget::image;
use iced::Element;

use super::render::{export_clean, Renderer};
use super::state::{EditSession, ImageOrigin, LoadTicket};
use super::{view, AvatarEditorOptions, Message, State};
use crate::ui::state::PointerState;

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
}

impl State {
    /// Create an empty editor.
    pub fn new(options: AvatarEditorOptions) -> Self {
        let renderer = Renderer::new(options.size, options.border_radius);
        Self {
            options,
            loaded: None,
            session: EditSession::default(),
            renderer,
            preview: None,
            pointer: PointerState::default(),
            cursor_position: None,
            load_generation: 0,
            saving: false,
        }
    }

    /// Register a new load. Results for earlier tickets are ignored once
    /// this one is issued.
    pub fn begin_load(&mut self, origin: ImageOrigin) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            generation: self.load_generation,
            origin,
        }
    }

    /// Clean square export of the current avatar as a data URL.
    pub fn export(&self) -> Option<String> {
        let loaded = self.loaded.as_ref()?;
        export_clean(
            &loaded.image,
            &loaded.transform.transform(),
            self.options.size,
            self.options.export_format,
            self.options.quality,
        )
    }

    /// Render the editor view.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    pub(crate) fn refresh_preview(&mut self) {
        let Some(loaded) = self.loaded.as_ref() else {
            return;
        };
        self.preview = self
            .renderer
            .draw_preview(&loaded.image, &loaded.transform.transform())
            .map(|surface| {
                image::Handle::from_rgba(
                    surface.width(),
                    surface.height(),
                    demultiplied_rgba(surface),
                )
            });
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(AvatarEditorOptions::default())
    }
}
