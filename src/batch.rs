//! Batch extraction: many PNGs in, one JSON object keyed by filename out.
//!
//! Per-file failures never stop the batch; they are logged and reported
//! back as skipped entries.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::state::document::to_pretty_json;

/// A file that produced no document, and why
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: CodecError,
}

/// Outcome of one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Decoded sheets keyed by base filename, in selection order
    pub documents: Map<String, Value>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to save JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save JSON to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decode every file in `paths`
///
/// A later file with the same base name replaces the earlier value but keeps
/// its position in the output.
pub fn extract_all<P: AsRef<Path>>(paths: &[P]) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        tracing::info!("🔍 Processing {}...", path.display());

        match codec::extract_document_file(path) {
            Ok(document) => {
                report.documents.insert(file_key(path), document);
            }
            Err(reason) => {
                tracing::warn!("⚠️  Skipping {}: {}", path.display(), reason);
                report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }

    tracing::info!(
        "✅ Batch complete: {} extracted, {} skipped",
        report.documents.len(),
        report.skipped.len()
    );
    report
}

/// Write the aggregate mapping as pretty JSON (4-space indent, UTF-8)
pub fn write_aggregate(path: &Path, documents: &Map<String, Value>) -> Result<(), BatchError> {
    let text = to_pretty_json(documents)?;

    fs::write(path, text).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("💾 Saved {} sheets to {}", documents.len(), path.display());
    Ok(())
}

/// Key for a file in the aggregate: its base name
fn file_key(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
