// Selection module - the single image the user has chosen and its preview.
// Desktop drops and the native chooser both hand us paths, so the media type
// is sniffed from the bytes rather than trusted from the source.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{SelectionError, SelectionResult};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageError, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the native file chooser's image filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff",
];

/// One user-chosen file. Cloning is cheap; the bytes are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = sniff_media_type(&name, &bytes);
        Self {
            name,
            media_type,
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk (drop target or chooser result).
    pub async fn read(path: &Path) -> SelectionResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| SelectionError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_bytes(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn ensure_image(self) -> SelectionResult<Self> {
        if self.is_image() {
            Ok(self)
        } else {
            Err(SelectionError::NotAnImage {
                name: self.name,
                media_type: self.media_type,
            })
        }
    }
}

/// Magic bytes first, then the extension, then `application/octet-stream`.
pub fn sniff_media_type(name: &str, bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(name).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string())
}

/// Decoded preview ready for an `img` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub data_url: Arc<str>,
    pub width: u32,
    pub height: u32,
}

impl Preview {
    pub fn caption(&self) -> String {
        format!("{} × {} px", self.width, self.height)
    }
}

/// Reads the image header and encodes the bytes as a data URL.
pub fn decode_preview_blocking(file: &SelectedFile) -> SelectionResult<Preview> {
    let decode_err = |source: ImageError| SelectionError::Decode {
        name: file.name.clone(),
        source,
    };
    let (width, height) = ImageReader::new(Cursor::new(file.bytes()))
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .into_dimensions()
        .map_err(|e| decode_err(e))?;
    let data_url = format!(
        "data:{};base64,{}",
        file.media_type,
        STANDARD.encode(file.bytes())
    );
    Ok(Preview {
        data_url: data_url.into(),
        width,
        height,
    })
}

/// Off-thread preview generation; large scans take a moment to encode.
pub async fn decode_preview(file: SelectedFile) -> SelectionResult<Preview> {
    tokio::task::spawn_blocking(move || decode_preview_blocking(&file)).await?
}
