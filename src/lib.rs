//! Character sheets stored inside PNG metadata.
//!
//! A sheet is any JSON document, base64-encoded behind an `ASCII\0\0\0`
//! marker in the image's `UserComment` field.
//!
//! - `codec`: pure extract/embed over PNG bytes (plus thin file helpers)
//! - `state`: the editor session, headless and testable
//! - `batch`: many PNGs into one JSON file keyed by filename
//! - `dialogs`: native pickers and message boxes used by the binaries

pub mod batch;
pub mod codec;
pub mod dialogs;
pub mod logging;
pub mod state;
