// SPDX-License-Identifier: MPL-2.0
//! Writing saved avatars to disk.

use crate::error::Result;
use crate::media::DataUrl;
use std::path::{Path, PathBuf};

/// Decodes `data_url` and writes its bytes next to `path`, using the
/// extension of the encoded format. Returns the written path.
pub async fn write_data_url(path: PathBuf, data_url: String) -> Result<PathBuf> {
    let data = DataUrl::parse(&data_url)?;
    let target = path.with_extension(data.extension());

    if let Some(parent) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, &data.bytes).await?;
    Ok(target)
}

/// Output file used when neither the CLI nor the config names one.
pub fn fallback_output_path(extension: &str) -> PathBuf {
    crate::app::paths::default_avatar_path(extension)
        .unwrap_or_else(|| Path::new("avatar").with_extension(extension))
}
