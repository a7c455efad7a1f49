use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong reading or writing an embedded character sheet
///
/// The `Display` text is shown to the user as-is, so keep it readable.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("The selected file is not a valid PNG image.")]
    NotPng,

    #[error("Failed to decode PNG: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("Failed to encode PNG: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("No 'UserComment' or suitable EXIF data found in the image metadata.")]
    MissingUserComment,

    #[error("Embedded data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Embedded data is empty.")]
    EmptyPayload,

    #[error("Embedded data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
