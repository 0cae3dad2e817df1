// SPDX-License-Identifier: MPL-2.0
//! Save/discard helpers for the editor session.

use super::EditSession;
use crate::ui::avatar_editor::{Event, State};

impl State {
    /// Snapshots the avatar and hands it to the host. Save and discard stay
    /// disabled until [`State::handle_save_finished`] runs.
    pub(crate) fn request_save(&mut self) -> Event {
        if !self.can_save() {
            return Event::None;
        }
        match self.export() {
            Some(data_url) => {
                self.saving = true;
                Event::SaveRequested(data_url)
            }
            None => Event::None,
        }
    }

    pub(crate) fn handle_save_finished(&mut self, result: Result<(), String>) -> Event {
        if !self.saving {
            return Event::None;
        }
        self.saving = false;
        if let Err(err) = result {
            tracing::error!("Failed to save avatar: {err}");
        }
        Event::None
    }

    /// Drops the image, wipes the preview and forgets the session. Loads
    /// still in flight become stale.
    pub(crate) fn discard(&mut self) -> Event {
        if !self.can_discard() {
            return Event::None;
        }
        self.loaded = None;
        self.renderer.clear();
        self.preview = None;
        self.session = EditSession::default();
        self.pointer.stop();
        self.load_generation += 1;
        Event::Discarded
    }
}
