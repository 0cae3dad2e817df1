// SPDX-License-Identifier: MPL-2.0
use iced_avatar::app::{self, Flags};
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `ICED_AVATAR_LOG=iced_avatar=debug`.
const LOG_ENV: &str = "ICED_AVATAR_LOG";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        avatar: opt_value(&mut args, "--avatar"),
        config_dir: opt_value(&mut args, "--config-dir"),
        output: opt_value(&mut args, "--output"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!("Invalid {key} argument: {err}");
        None
    })
}
