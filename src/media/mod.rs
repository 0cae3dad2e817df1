// SPDX-License-Identifier: MPL-2.0
//! Image decoding, loading and export for the avatar editor.

pub mod export;
pub mod image;
pub mod loader;

pub use self::export::{DataUrl, ExportFormat, Quality};
pub use self::image::RasterImage;
pub use self::loader::{AllowedTypes, AvatarSource};
