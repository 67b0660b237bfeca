use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for selection and preview operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Everything that can go wrong between a user choosing a file and its preview showing.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Failed to read {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{name}' is not an image (detected {media_type})")]
    NotAnImage { name: String, media_type: String },

    #[error("Could not decode '{name}': {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },

    #[error("Preview task failed to complete: {source}")]
    DecodeTask {
        #[from]
        source: tokio::task::JoinError,
    },
}

impl SelectionError {
    /// Short text for the drop zone notice; the full error goes to the log.
    pub fn notice(&self) -> String {
        match self {
            SelectionError::Unreadable { path, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Could not read {name}")
            }
            SelectionError::NotAnImage { name, .. } => format!("{name} is not an image"),
            SelectionError::Decode { name, .. } => format!("Could not open {name} as an image"),
            SelectionError::DecodeTask { .. } => "Preview generation was interrupted".to_string(),
        }
    }
}
