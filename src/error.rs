use thiserror::Error;

/// Errors raised while building or writing an instruction sheet.
///
/// `UnknownAspectRatio` and `ImageDecode` are recoverable: the document
/// builder falls back to the default ratio or leaves the grid cell blank.
/// Everything else aborts the build and no document is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown aspect ratio '{label}'")]
    UnknownAspectRatio { label: String },

    #[error("image decode failed: {reason}")]
    ImageDecode { reason: String },

    #[error("document build failed: {0}")]
    DocumentBuild(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::ImageDecode {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidRecord(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
