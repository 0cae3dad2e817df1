// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::avatar_editor;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(avatar_editor::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// The avatar write finished; carries the written path.
    AvatarSaved(Result<PathBuf, String>),
}

impl From<avatar_editor::Message> for Message {
    fn from(message: avatar_editor::Message) -> Self {
        Message::Editor(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Existing avatar to show on startup: URL, `data:` URL or local path.
    pub avatar: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_AVATAR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where saved avatars are written. Overrides `[output] avatar_path`.
    pub output: Option<String>,
}
