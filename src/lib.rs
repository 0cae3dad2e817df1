// SPDX-License-Identifier: MPL-2.0
//! `iced_avatar` is an avatar editor built with the Iced GUI framework.
//!
//! It loads an image, lets the user pan, zoom and rotate it inside a square
//! frame with rule-of-thirds guides, and exports the framed result as a
//! base64 data URL. Localization uses Fluent and preferences live in a TOML
//! settings file.

#![doc(html_root_url = "https://docs.rs/iced_avatar/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
