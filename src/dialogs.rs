//! Native dialogs (file pickers and message boxes).
//!
//! All of these block until the user answers. That is fine here: every
//! action in both tools is a direct response to a click.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

use crate::state::document::ExportFormat;

/// Ask for one PNG to open
pub fn pick_png() -> Option<PathBuf> {
    start_dialog()
        .set_title("Select PNG File")
        .add_filter("PNG Files", &["png"])
        .pick_file()
}

/// Ask for any number of PNGs (batch extraction)
pub fn pick_pngs() -> Option<Vec<PathBuf>> {
    start_dialog()
        .set_title("Select PNG Files")
        .add_filter("PNG Files", &["png"])
        .pick_files()
}

/// Ask where to write the re-embedded PNG
pub fn save_png(suggested_name: Option<&str>) -> Option<PathBuf> {
    let mut dialog = start_dialog()
        .set_title("Save PNG File")
        .add_filter("PNG Files", &["png"]);
    if let Some(name) = suggested_name {
        dialog = dialog.set_file_name(name);
    }
    dialog.save_file()
}

/// Ask where to export the buffer as `format`
pub fn save_export(format: ExportFormat) -> Option<PathBuf> {
    start_dialog()
        .set_title(format!("Export as {}", format.label()))
        .add_filter(format!("{} Files", format.label()), &[format.extension()])
        .save_file()
}

/// Ask where to write the batch output
pub fn save_aggregate() -> Option<PathBuf> {
    start_dialog()
        .set_title("Save JSON File")
        .add_filter("JSON Files", &["json"])
        .save_file()
}

pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}

pub fn show_info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message);
}

fn show(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// File dialog starting in the user's Pictures folder when there is one
fn start_dialog() -> FileDialog {
    let dialog = FileDialog::new();
    match dirs::picture_dir().filter(|dir| dir.is_dir()) {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}
