/// Character sheet <-> PNG metadata codec
///
/// This module handles:
/// - Locating the `UserComment` field (PNG text chunks, then raw EXIF)
/// - Stripping the `ASCII\0\0\0` marker and decoding the base64 payload
/// - Embedding a JSON document back into a re-encoded PNG
///
/// Everything here works on byte buffers and has no UI dependency.
/// The `*_file` helpers below are the only functions that touch the disk.

pub mod exif;
pub mod error;
pub mod metadata;
pub mod payload;

use serde_json::Value;
use std::fs;
use std::path::Path;

pub use error::CodecError;
pub use metadata::{embed, extract, extract_document};
pub use payload::{MARKER, USER_COMMENT_KEY};

/// Read a PNG from disk and return the decoded `UserComment` text
pub fn extract_file(path: &Path) -> Result<String, CodecError> {
    extract(&read(path)?)
}

/// Read a PNG from disk and parse its embedded character sheet
pub fn extract_document_file(path: &Path) -> Result<Value, CodecError> {
    extract_document(&read(path)?)
}

/// Embed `document` into the PNG at `source` and write the result to `output`
///
/// `source` and `output` may be the same file: the source is fully read
/// before anything is written.
pub fn embed_file(source: &Path, document: &Value, output: &Path) -> Result<(), CodecError> {
    let png = embed(&read(source)?, document)?;

    fs::write(output, png).map_err(|source| CodecError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("💾 Embedded character sheet into {}", output.display());
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>, CodecError> {
    fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })
}
