use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting the bitmap to disk.
///
/// Dialog cancellation is not an error anywhere in the app; a cancelled
/// dialog simply turns the triggering action into a no-op.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The target directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The bitmap could not be encoded or written.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
