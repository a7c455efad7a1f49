//! Batch extractor: pick PNGs, pull out every embedded character sheet and
//! save them all into one JSON file keyed by filename.

use sheet_editor::state::document::with_default_extension;
use sheet_editor::{batch, dialogs, logging};

fn main() {
    logging::init();

    let Some(files) = dialogs::pick_pngs() else {
        tracing::info!("No files selected, nothing to do");
        return;
    };

    let report = batch::extract_all(&files);

    if report.is_empty() {
        dialogs::show_info("No Data", "No valid data was found in the selected files.");
        return;
    }

    let Some(output) = dialogs::save_aggregate() else {
        tracing::info!("Save cancelled, {} sheets discarded", report.documents.len());
        return;
    };
    let output = with_default_extension(&output, "json");

    match batch::write_aggregate(&output, &report.documents) {
        Ok(()) => dialogs::show_info("Success", &format!("Data saved to {}", output.display())),
        Err(e) => {
            tracing::error!("❌ {}", e);
            dialogs::show_error("Error", &e.to_string());
        }
    }
}
