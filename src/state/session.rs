use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::document::{to_pretty_json, with_default_extension, DocumentStatus, ExportFormat};
use crate::codec::{self, CodecError};

/// Errors surfaced to the user from editor actions
///
/// Every variant leaves the session exactly as it was before the action.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No file is currently open.")]
    NoDocument,

    #[error("Invalid JSON format. Please correct the data. ({0})")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to extract or decode data: {0}")]
    Load(#[source] CodecError),

    #[error("Failed to save image with new data: {0}")]
    Save(#[source] CodecError),

    #[error("Failed to export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The PNG currently being edited
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDocument {
    /// Image the sheet was read from; pixels for every save come from here
    pub source: PathBuf,
    pub status: DocumentStatus,
}

/// One editor session: `NoDocument -> DocumentLoaded -> (Edited) -> Saved|Exported`
///
/// The session owns the "current file" reference. The text itself lives in
/// the UI's buffer and is handed in on every action that needs it.
#[derive(Debug, Default)]
pub struct EditorSession {
    document: Option<OpenDocument>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }

    /// Path of the open image, if any
    pub fn source(&self) -> Option<&Path> {
        self.document.as_ref().map(|doc| doc.source.as_path())
    }

    /// Load the sheet embedded in `path`
    ///
    /// Returns the pretty-printed JSON for the buffer. On failure the
    /// previously open document (if any) stays open.
    pub fn open(&mut self, path: &Path) -> Result<String, SessionError> {
        let document = codec::extract_document_file(path).map_err(SessionError::Load)?;
        let buffer = to_pretty_json(&document)
            .map_err(|e| SessionError::Load(CodecError::Json(e)))?;

        tracing::info!("📂 Opened character sheet from {}", path.display());

        self.document = Some(OpenDocument {
            source: path.to_path_buf(),
            status: DocumentStatus::Clean,
        });
        Ok(buffer)
    }

    /// Record that the buffer changed
    pub fn mark_edited(&mut self) {
        if let Some(doc) = self.document.as_mut() {
            doc.status = DocumentStatus::Edited;
        }
    }

    /// Validate `buffer` before asking where to save it
    ///
    /// Needs an open document (its image supplies the pixels) and valid JSON.
    pub fn prepare_save(&self, buffer: &str) -> Result<Value, SessionError> {
        if self.document.is_none() {
            return Err(SessionError::NoDocument);
        }
        serde_json::from_str(buffer).map_err(SessionError::InvalidJson)
    }

    /// Embed `document` into a copy of the open image written to `output`
    pub fn save(&mut self, document: &Value, output: &Path) -> Result<(), SessionError> {
        let doc = self.document.as_mut().ok_or(SessionError::NoDocument)?;

        codec::embed_file(&doc.source, document, output).map_err(SessionError::Save)?;

        doc.status = DocumentStatus::Saved(output.to_path_buf());
        Ok(())
    }

    /// `prepare_save` + `save` in one step, for callers that already know the output
    pub fn save_buffer(&mut self, buffer: &str, output: &Path) -> Result<(), SessionError> {
        let document = self.prepare_save(buffer)?;
        self.save(&document, output)
    }

    /// Write the raw buffer (not re-validated) to `path`
    ///
    /// The format's extension is appended when `path` has none. Returns the
    /// path actually written.
    pub fn export(
        &mut self,
        buffer: &str,
        path: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf, SessionError> {
        let path = with_default_extension(path, format.extension());

        fs::write(&path, buffer).map_err(|source| SessionError::Export {
            path: path.clone(),
            source,
        })?;

        tracing::info!("📝 Exported buffer as {} to {}", format, path.display());

        if let Some(doc) = self.document.as_mut() {
            doc.status = DocumentStatus::Exported(path.clone());
        }
        Ok(path)
    }
}
