/// Shared data structures for the editor state
///
/// These types flow between the session logic and the UI layer.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Plain-text formats the buffer can be exported as
///
/// The buffer is written verbatim in every case; the format only decides the
/// file extension and the dialog labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Json,
        ExportFormat::Markdown,
        ExportFormat::Text,
    ];

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    /// Short uppercase label used in menus and dialogs ("JSON", "MD", "TXT")
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Markdown => "MD",
            ExportFormat::Text => "TXT",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the open document stands relative to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Freshly loaded, buffer matches the image
    Clean,
    /// Buffer changed since load/save/export
    Edited,
    /// Last action embedded the buffer into this PNG
    Saved(PathBuf),
    /// Last action wrote the raw buffer to this file
    Exported(PathBuf),
}

impl DocumentStatus {
    /// Human-readable status line
    pub fn describe(&self) -> String {
        match self {
            DocumentStatus::Clean => "No changes.".to_string(),
            DocumentStatus::Edited => "Unsaved changes.".to_string(),
            DocumentStatus::Saved(path) => format!("Saved to {}", path.display()),
            DocumentStatus::Exported(path) => format!("Exported to {}", path.display()),
        }
    }
}

/// Pretty-print JSON with a 4-space indent (the layout shown in the editor)
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Join editor lines back into the exact buffer text
///
/// Lines are separated by `'\n'` and nothing is added at the end, so a
/// buffer loaded from `text` gives `text` back byte for byte.
pub fn buffer_text<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: Deref<Target = str>,
{
    let mut text = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
    }
    text
}

/// Append `extension` when `path` has none (mirrors a dialog's default extension)
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let text = to_pretty_json(&json!({"name": "Aria"})).unwrap();
        assert_eq!(text, "{\n    \"name\": \"Aria\"\n}");
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let doc: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": {"b": 2, "a": 3}}"#).unwrap();
        let text = to_pretty_json(&doc).unwrap();

        assert_eq!(
            text,
            "{\n    \"zeta\": 1,\n    \"alpha\": {\n        \"b\": 2,\n        \"a\": 3\n    }\n}"
        );
    }

    #[test]
    fn test_pretty_json_leaves_unicode_unescaped() {
        let text = to_pretty_json(&json!({"bio": "Née ✨"})).unwrap();
        assert!(text.contains("Née ✨"));
    }

    #[test]
    fn test_export_format_extensions() {
        let extensions: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(extensions, vec!["json", "md", "txt"]);
        assert_eq!(ExportFormat::Markdown.to_string(), "MD");
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/aria"), "md"),
            PathBuf::from("/tmp/aria.md")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/aria.txt"), "md"),
            PathBuf::from("/tmp/aria.txt")
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(DocumentStatus::Edited.describe(), "Unsaved changes.");
        assert_eq!(
            DocumentStatus::Saved(PathBuf::from("out.png")).describe(),
            "Saved to out.png"
        );
    }

    #[test]
    fn test_buffer_text_is_byte_exact() {
        let pretty = to_pretty_json(&json!({"name": "Aria"})).unwrap();

        for text in [pretty.as_str(), "{}\n", "a\n\nb", ""] {
            assert_eq!(buffer_text(text.split('\n')), text);
        }
    }

    #[test]
    fn test_buffer_text_adds_no_trailing_newline() {
        let lines = vec!["{".to_string(), "    \"hp\": 10".to_string(), "}".to_string()];
        assert_eq!(buffer_text(lines), "{\n    \"hp\": 10\n}");
    }
}
