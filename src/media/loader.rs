// SPDX-License-Identifier: MPL-2.0
//! Asynchronous avatar loading from user-picked files and host-supplied URLs.
//!
//! Loading never touches editor state: the futures resolve to a
//! [`RasterImage`] that the editor commits on its own update loop.

use super::export::DataUrl;
use super::image::{sniff_mime_type, RasterImage};
use crate::config::DEFAULT_ALLOWED_TYPES;
use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};

/// MIME types the file picker accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedTypes(Vec<String>);

impl AllowedTypes {
    pub fn new(types: Vec<String>) -> Self {
        Self(
            types
                .into_iter()
                .map(|mime| mime.trim().to_ascii_lowercase())
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, mime_type: &str) -> bool {
        self.0.iter().any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// File extensions matching the allowed types, for file dialog filters.
    pub fn extensions(&self) -> Vec<&'static str> {
        self.iter()
            .filter_map(ImageFormat::from_mime_type)
            .flat_map(|format| format.extensions_str().iter().copied())
            .collect()
    }

    /// Rejects `mime_type` unless it is on the list.
    pub fn validate(&self, mime_type: Option<&str>) -> Result<()> {
        match mime_type {
            Some(mime) if self.contains(mime) => Ok(()),
            Some(mime) => Err(Error::UnsupportedType(mime.to_string())),
            None => Err(Error::UnsupportedType("unknown".to_string())),
        }
    }
}

impl Default for AllowedTypes {
    fn default() -> Self {
        Self(DEFAULT_ALLOWED_TYPES.iter().map(ToString::to_string).collect())
    }
}

/// Where an avatar comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarSource {
    /// A file the user picked.
    File(PathBuf),
    /// A host-supplied location: `http(s)://`, `data:`, `file://` or a local path.
    Url(String),
}

impl AvatarSource {
    /// Loads the source, validating file picks against `allowed`.
    pub async fn load(self, allowed: AllowedTypes) -> Result<RasterImage> {
        match self {
            AvatarSource::File(path) => load_from_file(path, allowed).await,
            AvatarSource::Url(url) => load_from_url(url).await,
        }
    }
}

/// Reads, validates and decodes a user-picked file.
pub async fn load_from_file(path: PathBuf, allowed: AllowedTypes) -> Result<RasterImage> {
    let bytes = tokio::fs::read(&path).await?;
    let mime_type = detect_mime_type(&bytes, &path);
    allowed.validate(mime_type)?;
    RasterImage::decode(&bytes)
}

/// Fetches and decodes a host-supplied avatar.
///
/// Remote URLs are fetched without a cookie store or credentials so the
/// result can always be exported.
pub async fn load_from_url(url: String) -> Result<RasterImage> {
    if url.starts_with("data:") {
        let data = DataUrl::parse(&url)?;
        return RasterImage::decode(&data.bytes);
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::get(&url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        return RasterImage::decode(&bytes);
    }

    let path = url.strip_prefix("file://").unwrap_or(&url);
    let bytes = tokio::fs::read(path).await?;
    RasterImage::decode(&bytes)
}

/// Content sniffing first, file extension as fallback.
fn detect_mime_type(bytes: &[u8], path: &Path) -> Option<&'static str> {
    sniff_mime_type(bytes).or_else(|| {
        ImageFormat::from_path(path)
            .ok()
            .map(|format| format.to_mime_type())
    })
}
