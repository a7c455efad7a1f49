/// EXIF fallback for the comment
///
/// Some writers put the comment in the `eXIf` chunk instead of a text chunk.
/// The PNG decoder hands us the raw EXIF block; we only look for the marker
/// inside it, so there is no TIFF parsing here.
use super::payload::{utf8_ignoring_invalid, MARKER};

/// Everything after the first marker in a raw EXIF block
///
/// The block is read as UTF-8 with invalid bytes dropped.
pub fn find_comment(exif: &[u8]) -> Option<String> {
    let text = utf8_ignoring_invalid(exif);
    text.find(MARKER)
        .map(|start| text[start + MARKER.len()..].to_string())
}
