// SPDX-License-Identifier: MPL-2.0
//! Message handling: turns editor events into asynchronous tasks.

use super::persistence::write_data_url;
use super::{App, Message, Status};
use crate::media::{AllowedTypes, AvatarSource};
use crate::ui::avatar_editor::{self, Event, ImageOrigin, LoadTicket};
use iced::Task;

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(message) => {
                let event = self.editor.update(message);
                self.handle_editor_event(event)
            }
            Message::OpenFileDialogResult(Some(path)) => {
                let ticket = self.editor.begin_load(ImageOrigin::UserSupplied);
                load_task(ticket, AvatarSource::File(path), self.allowed_types())
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::AvatarSaved(result) => {
                let finished = match result {
                    Ok(path) => {
                        tracing::info!("Avatar saved to {}", path.display());
                        self.status = Status::Saved;
                        Ok(())
                    }
                    Err(err) => {
                        self.status = Status::SaveFailed;
                        Err(err)
                    }
                };
                let event = self
                    .editor
                    .update(avatar_editor::Message::SaveFinished(finished));
                self.handle_editor_event(event)
            }
        }
    }

    fn handle_editor_event(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::None => Task::none(),
            Event::PickFileRequested => pick_file_task(
                self.i18n.tr("file-dialog-title"),
                self.i18n.tr("file-dialog-filter"),
                self.allowed_types(),
            ),
            Event::Changed(data_url) => {
                self.latest_avatar = Some(data_url);
                self.status = Status::Changed;
                Task::none()
            }
            Event::SaveRequested(data_url) => Task::perform(
                write_data_url(self.output_path.clone(), data_url),
                |result| Message::AvatarSaved(result.map_err(|err| err.to_string())),
            ),
            Event::Discarded => {
                self.latest_avatar = None;
                self.status = Status::Discarded;
                Task::none()
            }
            Event::LoadFailed(key) => {
                self.status = Status::Error(key);
                Task::none()
            }
        }
    }

    fn allowed_types(&self) -> AllowedTypes {
        self.editor.options().allowed_types.clone()
    }
}

/// Loads `source` off the update loop and reports back under `ticket`.
pub(super) fn load_task(
    ticket: LoadTicket,
    source: AvatarSource,
    allowed: AllowedTypes,
) -> Task<Message> {
    Task::perform(source.load(allowed), move |result| {
        Message::Editor(avatar_editor::Message::ImageLoaded { ticket, result })
    })
}

fn pick_file_task(title: String, filter_name: String, allowed: AllowedTypes) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, &allowed.extensions())
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}
