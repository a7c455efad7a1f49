/// The `UserComment` field value: `ASCII\0\0\0` followed by base64 JSON
///
/// The marker is the EXIF character-code prefix for ASCII comments. Tools that
/// write these sheets put it in front of the base64 text even in PNG text
/// chunks, so we strip it on the way in and add it on the way out.
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::Value;

use super::CodecError;

/// Prefix in front of the base64 payload
pub const MARKER: &str = "ASCII\0\0\0";

/// Text chunk keyword that carries the payload
pub const USER_COMMENT_KEY: &str = "UserComment";

/// Lenient decoder: accepts missing or extra padding and stray trailing bits
const TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Build the field value for `document` (compact JSON, standard padded base64)
pub fn encode(document: &Value) -> Result<String, CodecError> {
    let json = serde_json::to_string(document)?;
    Ok(format!("{}{}", MARKER, STANDARD.encode(json.as_bytes())))
}

/// Decode a raw field value back to JSON text
///
/// The value is split on the marker and the last segment is taken, so a
/// value with no marker at all is decoded whole. Characters outside the
/// base64 alphabet are discarded and invalid UTF-8 in the decoded bytes is
/// dropped rather than failing the whole document.
pub fn decode(field: &str) -> Result<String, CodecError> {
    let segment = field.rsplit(MARKER).next().unwrap_or(field);

    let cleaned: String = segment
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/'))
        .collect();

    let bytes = TOLERANT.decode(cleaned)?;
    let text = utf8_ignoring_invalid(&bytes);

    if text.is_empty() {
        return Err(CodecError::EmptyPayload);
    }

    Ok(text)
}

/// Keep the valid UTF-8 runs of `bytes`, silently skipping anything else
pub(crate) fn utf8_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
