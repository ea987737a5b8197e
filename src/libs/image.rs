//! Profile image uploads, stored inline as data URLs.

use base64::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted image file, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("'{0}' is not a supported image type")]
    UnsupportedType(PathBuf),

    #[error("failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Checks the size limit from file metadata, before any content is read.
pub fn check_size(size: u64) -> Result<(), ImageError> {
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size, limit: MAX_IMAGE_BYTES });
    }
    Ok(())
}

/// Reads an image file into a `data:<mime>;base64,...` URL.
pub fn read_data_url(path: &Path) -> Result<String, ImageError> {
    let read_err = |source: io::Error| ImageError::Read { path: path.to_path_buf(), source };
    let mime = mime_for(path).ok_or_else(|| ImageError::UnsupportedType(path.to_path_buf()))?;

    check_size(fs::metadata(path).map_err(read_err)?.len())?;
    let bytes = fs::read(path).map_err(read_err)?;

    Ok(format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes)))
}
