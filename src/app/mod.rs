// SPDX-License-Identifier: MPL-2.0
//! Application root state: hosts the avatar editor and performs its side
//! effects.
//!
//! The `App` struct wires together the editor, localization and settings,
//! and translates editor events into tasks: opening the file picker,
//! loading images and writing saved avatars to disk.

mod message;
pub mod paths;
mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};
pub use persistence::write_data_url;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::AvatarSource;
use crate::ui::avatar_editor::{ImageOrigin, State as AvatarEditorState};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// What the status line currently reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Empty,
    Changed,
    Saved,
    SaveFailed,
    Discarded,
    /// Localized message id of a load or config problem.
    Error(&'static str),
}

impl Status {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Status::Empty => "status-empty",
            Status::Changed => "status-changed",
            Status::Saved => "status-saved",
            Status::SaveFailed => "status-save-failed",
            Status::Discarded => "status-discarded",
            Status::Error(key) => key,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    editor: AvatarEditorState,
    /// Where saved avatars go; the extension follows the export format.
    output_path: PathBuf,
    /// Last data URL reported by the editor.
    latest_avatar: Option<String>,
    status: Status,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.editor.has_image())
            .field("output_path", &self.output_path)
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads config and localization, then preloads the avatar named in
    /// `flags`, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::with_config(&flags, &config);
        if config_warning.is_some() {
            app.status = Status::Error("notification-config-load-error");
        }

        let task = match flags.avatar {
            Some(avatar) => app.preload(AvatarSource::Url(avatar)),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the app from an already loaded config.
    pub fn with_config(flags: &Flags, config: &Config) -> Self {
        let options = config.editor_options();
        let output_path = flags
            .output
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.output.avatar_path.clone())
            .unwrap_or_else(|| {
                persistence::fallback_output_path(options.export_format.extension())
            });

        Self {
            i18n: I18n::new(flags.lang.clone(), config),
            editor: AvatarEditorState::new(options),
            output_path,
            latest_avatar: None,
            status: Status::Empty,
        }
    }

    /// Shows an existing avatar without reporting it as a change.
    pub fn preload(&mut self, source: AvatarSource) -> Task<Message> {
        let ticket = self.editor.begin_load(ImageOrigin::Preloaded);
        update::load_task(ticket, source, self.editor.options().allowed_types.clone())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            editor: &self.editor,
            status: self.status,
            output_path: &self.output_path,
        })
    }

    pub fn editor(&self) -> &AvatarEditorState {
        &self.editor
    }

    pub fn latest_avatar(&self) -> Option<&str> {
        self.latest_avatar.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn output_path(&self) -> &std::path::Path {
        &self.output_path
    }
}
