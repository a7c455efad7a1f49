/// Reading and writing the `UserComment` field of a PNG
///
/// Lookup order when extracting:
/// 1. `tEXt` chunk keyed `UserComment`
/// 2. `zTXt` chunk keyed `UserComment`
/// 3. `iTXt` chunk keyed `UserComment`
/// 4. Raw `eXIf` chunk scanned for the `ASCII\0\0\0` marker
///
/// Within one chunk kind the first `UserComment` wins.
///
/// Embedding re-encodes the image with the same pixel layout and a single
/// fresh `UserComment` text chunk.
use image::ImageFormat;
use png::{Decoder, Encoder, Info, Transformations};
use serde_json::Value;
use std::io::Cursor;

use super::exif;
use super::payload::{self, USER_COMMENT_KEY};
use super::CodecError;

/// A fully decoded PNG: header/metadata plus the raw (untransformed) samples
struct DecodedPng {
    info: Info<'static>,
    pixels: Vec<u8>,
}

impl DecodedPng {
    fn read(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut decoder = Decoder::new(Cursor::new(bytes));
        // Keep samples exactly as stored so re-encoding is lossless
        decoder.set_transformations(Transformations::IDENTITY);

        let mut reader = decoder.read_info()?;
        let size = reader
            .output_buffer_size()
            .ok_or(png::DecodingError::LimitsExceeded)?;
        let mut pixels = vec![0; size];
        let frame = reader.next_frame(&mut pixels)?;
        pixels.truncate(frame.buffer_size());

        // Text and eXIf chunks may also follow the image data
        reader.finish()?;

        Ok(Self {
            info: reader.info().clone(),
            pixels,
        })
    }

    /// Value of the first `UserComment` text chunk, if any
    fn user_comment(&self) -> Option<String> {
        let info = &self.info;

        if let Some(chunk) = info
            .uncompressed_latin1_text
            .iter()
            .find(|chunk| chunk.keyword == USER_COMMENT_KEY)
        {
            return Some(chunk.text.clone());
        }

        let compressed = info
            .compressed_latin1_text
            .iter()
            .filter(|chunk| chunk.keyword == USER_COMMENT_KEY)
            .map(|chunk| chunk.get_text());
        let international = info
            .utf8_text
            .iter()
            .filter(|chunk| chunk.keyword == USER_COMMENT_KEY)
            .map(|chunk| chunk.get_text());

        compressed
            .chain(international)
            .find_map(|text| match text {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("⚠️  Skipping unreadable UserComment chunk: {}", e);
                    None
                }
            })
    }

    /// Text after the marker in the `eXIf` chunk, if any
    fn exif_comment(&self) -> Option<String> {
        self.info
            .exif_metadata
            .as_deref()
            .and_then(exif::find_comment)
    }
}

/// Decode the embedded character sheet text from PNG bytes
///
/// Fails with `MissingUserComment` when neither a text chunk nor the EXIF
/// block carries a (non-empty) comment.
pub fn extract(bytes: &[u8]) -> Result<String, CodecError> {
    ensure_png(bytes)?;

    let decoded = DecodedPng::read(bytes)?;
    let raw = decoded
        .user_comment()
        .filter(|raw| !raw.is_empty())
        .or_else(|| {
            tracing::debug!("No UserComment text chunk, falling back to EXIF");
            decoded.exif_comment()
        })
        .filter(|raw| !raw.is_empty())
        .ok_or(CodecError::MissingUserComment)?;

    payload::decode(&raw)
}

/// `extract` followed by a JSON parse
pub fn extract_document(bytes: &[u8]) -> Result<Value, CodecError> {
    let text = extract(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Re-encode `bytes` with `document` stored in the `UserComment` field
///
/// Dimensions, color type, bit depth, palette and transparency are kept.
/// Other text chunks are carried over; any previous `UserComment` is dropped.
pub fn embed(bytes: &[u8], document: &Value) -> Result<Vec<u8>, CodecError> {
    ensure_png(bytes)?;

    let field = payload::encode(document)?;
    let DecodedPng { info, pixels } = DecodedPng::read(bytes)?;

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, info.width, info.height);
        encoder.set_color(info.color_type);
        encoder.set_depth(info.bit_depth);
        if let Some(palette) = &info.palette {
            encoder.set_palette(palette.to_vec());
        }
        if let Some(trns) = &info.trns {
            encoder.set_trns(trns.to_vec());
        }

        carry_over_text(&mut encoder, &info)?;
        encoder.add_text_chunk(USER_COMMENT_KEY.to_string(), field)?;

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
        writer.finish()?;
    }

    tracing::debug!(
        "Re-encoded {}x{} PNG ({} bytes)",
        info.width,
        info.height,
        out.len()
    );
    Ok(out)
}

fn carry_over_text<W: std::io::Write>(
    encoder: &mut Encoder<'_, W>,
    info: &Info<'_>,
) -> Result<(), CodecError> {
    for chunk in info
        .uncompressed_latin1_text
        .iter()
        .filter(|chunk| chunk.keyword != USER_COMMENT_KEY)
    {
        encoder.add_text_chunk(chunk.keyword.clone(), chunk.text.clone())?;
    }

    for chunk in info
        .compressed_latin1_text
        .iter()
        .filter(|chunk| chunk.keyword != USER_COMMENT_KEY)
    {
        encoder.add_ztxt_chunk(chunk.keyword.clone(), chunk.get_text()?)?;
    }

    for chunk in info
        .utf8_text
        .iter()
        .filter(|chunk| chunk.keyword != USER_COMMENT_KEY)
    {
        encoder.add_itxt_chunk(chunk.keyword.clone(), chunk.get_text()?)?;
    }

    Ok(())
}

fn ensure_png(bytes: &[u8]) -> Result<(), CodecError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => Ok(()),
        _ => Err(CodecError::NotPng),
    }
}
